use std::sync::Arc;

use futures::future::BoxFuture;
use reqwest::{Client, Method, header};
use serde::de::DeserializeOwned;

use crate::dao::{
    models::{MatchResolution, PlayerEntity},
    player_store::PlayerStore,
    storage::StorageResult,
};

use super::{
    config::RestConfig,
    error::{RestDaoError, RestResult},
    models::{PLAYERS_PATH, PlayerRow, RESOLVE_MATCH_PATH, ResolveMatchParams},
};

/// [`PlayerStore`] implementation backed by the hosted store's REST API.
#[derive(Clone)]
pub struct RestPlayerStore {
    client: Client,
    base_url: Arc<str>,
    api_key: Arc<str>,
}

impl RestPlayerStore {
    /// Build the HTTP client from the given configuration.
    pub fn new(config: RestConfig) -> RestResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|source| RestDaoError::ClientBuilder { source })?;

        Ok(Self {
            client,
            base_url: Arc::<str>::from(config.base_url.trim_end_matches('/')),
            api_key: Arc::<str>::from(config.api_key),
        })
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{}", self.base_url, path);
        self.client
            .request(method, url)
            .header("apikey", self.api_key.as_ref())
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.api_key.as_ref()),
            )
    }

    async fn get_rows<T>(&self, path: &str, query: &[(&str, String)]) -> RestResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let response = self
            .request(Method::GET, path)
            .query(query)
            .send()
            .await
            .map_err(|source| RestDaoError::RequestSend {
                path: path.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(RestDaoError::RequestStatus {
                path: path.to_string(),
                status: response.status(),
            });
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|source| RestDaoError::DecodeResponse {
                path: path.to_string(),
                source,
            })
    }

    async fn call_rpc(&self, params: ResolveMatchParams) -> RestResult<()> {
        let response = self
            .request(Method::POST, RESOLVE_MATCH_PATH)
            .json(&params)
            .send()
            .await
            .map_err(|source| RestDaoError::RequestSend {
                path: RESOLVE_MATCH_PATH.to_string(),
                source,
            })?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(RestDaoError::RequestStatus {
                path: RESOLVE_MATCH_PATH.to_string(),
                status: response.status(),
            })
        }
    }
}

impl PlayerStore for RestPlayerStore {
    fn find_player(&self, name: &str) -> BoxFuture<'static, StorageResult<Option<PlayerEntity>>> {
        let store = self.clone();
        let name = name.to_string();
        Box::pin(async move {
            let query = [
                ("select", "username,score,wins,losses".to_string()),
                ("username", format!("eq.{name}")),
                ("limit", "1".to_string()),
            ];
            let rows = store.get_rows::<PlayerRow>(PLAYERS_PATH, &query).await?;
            Ok(rows.into_iter().next().map(PlayerRow::into_entity))
        })
    }

    fn top_players(&self, limit: usize) -> BoxFuture<'static, StorageResult<Vec<PlayerEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            // Username is the secondary sort key so equal scores come back in
            // a deterministic order.
            let query = [
                ("select", "username,score,wins,losses".to_string()),
                ("order", "score.desc,username.asc".to_string()),
                ("limit", limit.to_string()),
            ];
            let rows = store.get_rows::<PlayerRow>(PLAYERS_PATH, &query).await?;
            Ok(rows.into_iter().map(PlayerRow::into_entity).collect())
        })
    }

    fn resolve_match(&self, resolution: MatchResolution) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            store.call_rpc(resolution.into()).await?;
            Ok(())
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            let query = [("select", "username".to_string()), ("limit", "1".to_string())];
            store
                .get_rows::<serde_json::Value>(PLAYERS_PATH, &query)
                .await?;
            Ok(())
        })
    }
}
