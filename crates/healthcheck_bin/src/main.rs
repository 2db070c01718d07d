use serde::Deserialize;
use std::env;
use std::time::Duration;

const DEFAULT_URL: &str = "http://localhost:8080/healthcheck";

#[derive(Debug, thiserror::Error)]
enum HealthcheckError {
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("Status code {0} from healthcheck")]
    Status(u16),
    #[error("Service reported status {0:?}")]
    NotOk(String),
}

#[derive(Debug, Deserialize)]
struct StatusJSON {
    status: String,
}

fn check(url: &str) -> Result<(), HealthcheckError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()?;
    let res = client.get(url).send()?;
    if !res.status().is_success() {
        return Err(HealthcheckError::Status(res.status().as_u16()));
    }
    let body: StatusJSON = res.json()?;
    if body.status != "ok" {
        return Err(HealthcheckError::NotOk(body.status));
    }
    Ok(())
}

fn main() -> Result<(), HealthcheckError> {
    dotenvy::dotenv().ok();
    let url = env::var("DASHBOARD_HEALTHCHECK_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_URL.to_string());
    check(&url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn serve(template: ResponseTemplate) -> (tokio::runtime::Runtime, MockServer) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let server = rt.block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/healthcheck"))
                .respond_with(template)
                .mount(&server)
                .await;
            server
        });
        (rt, server)
    }

    #[test]
    fn check_pass_ok() {
        let (_rt, server) = serve(ResponseTemplate::new(200).set_body_string(r#"{"status":"ok"}"#));
        assert!(check(&format!("{}/healthcheck", server.uri())).is_ok());
    }

    #[test]
    fn check_fail_status_code() {
        let (_rt, server) = serve(ResponseTemplate::new(502));
        let err = check(&format!("{}/healthcheck", server.uri())).unwrap_err();
        assert!(matches!(err, HealthcheckError::Status(502)));
    }

    #[test]
    fn check_fail_not_ok_body() {
        let (_rt, server) =
            serve(ResponseTemplate::new(200).set_body_string(r#"{"status":"degraded"}"#));
        let err = check(&format!("{}/healthcheck", server.uri())).unwrap_err();
        assert!(matches!(err, HealthcheckError::NotOk(status) if status == "degraded"));
    }
}
