//! One-time Google Calendar authorization helper.
//!
//! Prints the consent URL, reads the pasted authorization code from stdin,
//! exchanges it for a token pair, and prints the refresh token for manual
//! insertion into the server's `.env`. Failures are only logged; the process
//! exits 0 either way, matching the run-once, read-the-terminal nature of
//! the tool.

use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};

use log::error;
use serde::Deserialize;
use url::Url;

const AUTH_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const CALENDAR_SCOPE: &str = "https://www.googleapis.com/auth/calendar";
const DEFAULT_REDIRECT_URI: &str = "http://localhost:5000/auth/calendar";

struct OauthConfig {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
}

impl OauthConfig {
    fn from_env() -> Result<Self, String> {
        let client_id = env::var("GOOGLE_CLIENT_ID")
            .map_err(|_| "GOOGLE_CLIENT_ID is not set".to_string())?;
        let client_secret = env::var("GOOGLE_CLIENT_SECRET")
            .map_err(|_| "GOOGLE_CLIENT_SECRET is not set".to_string())?;
        let redirect_uri =
            env::var("GOOGLE_REDIRECT_URI").unwrap_or_else(|_| DEFAULT_REDIRECT_URI.to_string());
        Ok(Self {
            client_id,
            client_secret,
            redirect_uri,
        })
    }
}

/// Token pair returned by the token endpoint
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
    #[serde(default)]
    scope: Option<String>,
}

/// Consent URL requesting offline calendar access. `prompt=consent` forces
/// Google to issue a refresh token even for a previously authorized client.
fn consent_url(config: &OauthConfig) -> String {
    let mut url = Url::parse(AUTH_ENDPOINT).expect("auth endpoint is a valid URL");
    url.query_pairs_mut()
        .append_pair("client_id", &config.client_id)
        .append_pair("redirect_uri", &config.redirect_uri)
        .append_pair("response_type", "code")
        .append_pair("scope", CALENDAR_SCOPE)
        .append_pair("access_type", "offline")
        .append_pair("prompt", "consent");
    url.to_string()
}

async fn exchange_code(
    config: &OauthConfig,
    code: &str,
) -> Result<TokenResponse, Box<dyn Error>> {
    let params = [
        ("code", code),
        ("client_id", &config.client_id),
        ("client_secret", &config.client_secret),
        ("redirect_uri", &config.redirect_uri),
        ("grant_type", "authorization_code"),
    ];

    let res = reqwest::Client::new()
        .post(TOKEN_ENDPOINT)
        .form(&params)
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(format!("token endpoint returned {}: {}", status, body).into());
    }

    Ok(res.json::<TokenResponse>().await?)
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = match OauthConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            return;
        }
    };

    println!("Visit this URL to authorize the app:\n{}", consent_url(&config));
    print!("\nPaste the code from the redirect URL here: ");
    let _ = io::stdout().flush();

    let mut code = String::new();
    if io::stdin().lock().read_line(&mut code).is_err() {
        error!("could not read the authorization code from stdin");
        return;
    }
    let code = code.trim();
    if code.is_empty() {
        error!("no authorization code entered");
        return;
    }

    match exchange_code(&config, code).await {
        Ok(tokens) => {
            println!("\nAccess token: {}", tokens.access_token);
            if let Some(scope) = &tokens.scope {
                println!("Scope: {}", scope);
            }
            if let Some(expires_in) = tokens.expires_in {
                println!("Expires in: {}s", expires_in);
            }
            match tokens.refresh_token {
                Some(refresh_token) => {
                    println!("\nCopy the refresh token into your .env file like this:");
                    println!("GOOGLE_REFRESH_TOKEN={}", refresh_token);
                }
                None => error!(
                    "the response carried no refresh token; revoke the app's access and re-run"
                ),
            }
        }
        Err(err) => error!("error getting token: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> OauthConfig {
        OauthConfig {
            client_id: "client-123.apps.googleusercontent.com".to_string(),
            client_secret: "shhh".to_string(),
            redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
        }
    }

    #[test]
    fn consent_url_requests_offline_calendar_access() {
        let url = Url::parse(&consent_url(&test_config())).unwrap();
        assert_eq!(url.host_str(), Some("accounts.google.com"));

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        let get = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };

        assert_eq!(get("client_id"), Some("client-123.apps.googleusercontent.com"));
        assert_eq!(get("redirect_uri"), Some(DEFAULT_REDIRECT_URI));
        assert_eq!(get("response_type"), Some("code"));
        assert_eq!(get("scope"), Some(CALENDAR_SCOPE));
        assert_eq!(get("access_type"), Some("offline"));
        assert_eq!(get("prompt"), Some("consent"));
    }

    #[test]
    fn consent_url_never_leaks_the_client_secret() {
        assert!(!consent_url(&test_config()).contains("shhh"));
    }

    #[test]
    fn token_response_decodes_a_full_grant() {
        let json = r#"{
            "access_token": "ya29.a0Af",
            "refresh_token": "1//0gabcdef",
            "expires_in": 3599,
            "scope": "https://www.googleapis.com/auth/calendar",
            "token_type": "Bearer"
        }"#;
        let tokens: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(tokens.access_token, "ya29.a0Af");
        assert_eq!(tokens.refresh_token.as_deref(), Some("1//0gabcdef"));
        assert_eq!(tokens.expires_in, Some(3599));
    }

    #[test]
    fn token_response_tolerates_a_missing_refresh_token() {
        let json = r#"{"access_token": "ya29.a0Af", "token_type": "Bearer"}"#;
        let tokens: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(tokens.refresh_token, None);
    }
}
