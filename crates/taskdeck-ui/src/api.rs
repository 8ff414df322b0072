use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use taskdeck_core::config::ClientConfig;
use taskdeck_shared::{
    ApiError, StatsSummary, Task, TaskCreate, TaskUpdate, TokenResponse, UserCreate,
};
use tracing::debug;
use web_sys::UrlSearchParams;

#[derive(Clone, PartialEq)]
pub struct Api {
    base: String,
    token: Option<String>,
}

impl Api {
    pub fn new(config: &ClientConfig, token: Option<&str>) -> Self {
        Self {
            base: config.api_base.clone(),
            token: token.map(str::to_string),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    // A 401 on a call that carried a token means the token was rejected;
    // callers treat that as an implicit logout. A 401 without a token (bad
    // login credentials) stays an ordinary API error.
    async fn check(&self, response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        if status == 401 && self.token.is_some() {
            return Err(ApiError::Auth);
        }
        let message = match response.text().await {
            Ok(text) => error_detail(&text).unwrap_or_else(|| format!("HTTP {status}")),
            Err(_) => format!("HTTP {status}"),
        };
        Err(ApiError::http(status, message))
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let form = UrlSearchParams::new()
            .map_err(|err| ApiError::network(format!("{err:?}")))?;
        form.append("username", username);
        form.append("password", password);
        form.append("grant_type", "password");
        let body = String::from(form.to_string());

        let response = Request::post(&self.url("/token"))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(net_err)?
            .send()
            .await
            .map_err(net_err)?;
        let response = self.check(response).await?;
        decode_strict(response).await
    }

    pub async fn register(&self, body: &UserCreate) -> Result<(), ApiError> {
        let response = Request::post(&self.url("/register"))
            .json(body)
            .map_err(net_err)?
            .send()
            .await
            .map_err(net_err)?;
        self.check(response).await?;
        Ok(())
    }

    pub async fn list_tasks(&self, params: &[(String, String)]) -> Result<Vec<Task>, ApiError> {
        debug!(?params, "fetching task list");
        let builder = self.authorized(
            Request::get(&self.url("/tasks/"))
                .query(params.iter().map(|(key, value)| (key.as_str(), value.as_str()))),
        );
        let response = builder.send().await.map_err(net_err)?;
        let response = self.check(response).await?;
        decode_lenient(response).await
    }

    // Minimal authenticated fetch used to validate a persisted token.
    pub async fn probe(&self) -> Result<(), ApiError> {
        let params = [
            ("skip".to_string(), "0".to_string()),
            ("limit".to_string(), "1".to_string()),
        ];
        self.list_tasks(&params).await.map(|_| ())
    }

    pub async fn get_task(&self, id: u64) -> Result<Task, ApiError> {
        let builder = self.authorized(Request::get(&self.url(&format!("/tasks/{id}"))));
        let response = builder.send().await.map_err(net_err)?;
        let response = self.check(response).await?;
        decode_strict(response).await
    }

    pub async fn create_task(&self, body: &TaskCreate) -> Result<(), ApiError> {
        let request = self
            .authorized(Request::post(&self.url("/tasks/")))
            .json(body)
            .map_err(net_err)?;
        let response = request.send().await.map_err(net_err)?;
        self.check(response).await?;
        Ok(())
    }

    pub async fn update_task(&self, id: u64, body: &TaskUpdate) -> Result<(), ApiError> {
        let request = self
            .authorized(Request::put(&self.url(&format!("/tasks/{id}"))))
            .json(body)
            .map_err(net_err)?;
        let response = request.send().await.map_err(net_err)?;
        self.check(response).await?;
        Ok(())
    }

    pub async fn delete_task(&self, id: u64) -> Result<(), ApiError> {
        let builder = self.authorized(Request::delete(&self.url(&format!("/tasks/{id}"))));
        let response = builder.send().await.map_err(net_err)?;
        self.check(response).await?;
        Ok(())
    }

    pub async fn stats(&self) -> Result<StatsSummary, ApiError> {
        let builder = self.authorized(Request::get(&self.url("/tasks/stats/summary")));
        let response = builder.send().await.map_err(net_err)?;
        let response = self.check(response).await?;
        decode_lenient(response).await
    }
}

fn net_err(err: gloo::net::Error) -> ApiError {
    ApiError::network(err.to_string())
}

fn error_detail(text: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(text).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(message) => Some(message.clone()),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

async fn decode_strict<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

// An empty or undecodable success body decodes to the empty value instead of
// failing; mutation endpoints only care about the status.
async fn decode_lenient<T: DeserializeOwned + Default>(response: Response) -> Result<T, ApiError> {
    let text = response.text().await.map_err(net_err)?;
    if text.trim().is_empty() {
        return Ok(T::default());
    }
    match serde_json::from_str(&text) {
        Ok(value) => Ok(value),
        Err(err) => {
            debug!(error = %err, "success body did not decode, treating as empty");
            Ok(T::default())
        }
    }
}
