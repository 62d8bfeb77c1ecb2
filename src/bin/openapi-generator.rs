use utoipa::OpenApi;
use whack_board::services::documentation::ApiDoc;

fn main() {
    let doc = ApiDoc::openapi();
    println!("{}", doc.to_pretty_json().unwrap());
}
