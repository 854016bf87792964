// SPDX-License-Identifier: MPL-2.0
//! EmailJS mail relay adapter.
//!
//! Posts contact messages to the EmailJS REST API (or any endpoint speaking
//! the same JSON shape). Credentials come from the `[contact]` section of
//! `settings.toml`.

use crate::application::port::{MailMessage, MailRelay, RelayError};
use crate::config::{ContactConfig, RELAY_TIMEOUT_SECS};
use serde::Serialize;
use std::future::Future;
use std::time::Duration;

/// Account identifiers required by the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Credentials {
    service_id: String,
    template_id: String,
    public_key: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct SendRequest {
    service_id: String,
    template_id: String,
    user_id: String,
    template_params: TemplateParams,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct TemplateParams {
    from_name: String,
    from_email: String,
    to_name: String,
    to_email: String,
    message: String,
}

/// [`MailRelay`] backed by the EmailJS HTTP API.
#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    endpoint: String,
    credentials: Option<Credentials>,
    recipient_name: String,
    recipient_email: String,
}

impl EmailJsRelay {
    /// Builds a relay from the contact settings. Missing or blank credentials
    /// leave the relay unconfigured; every send then fails with
    /// [`RelayError::NotConfigured`].
    #[must_use]
    pub fn from_config(config: &ContactConfig) -> Self {
        let present = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let credentials = match (
            present(&config.service_id),
            present(&config.template_id),
            present(&config.public_key),
        ) {
            (Some(service_id), Some(template_id), Some(public_key)) => Some(Credentials {
                service_id,
                template_id,
                public_key,
            }),
            _ => None,
        };

        Self {
            endpoint: config.endpoint().to_string(),
            credentials,
            recipient_name: config.recipient_name.clone().unwrap_or_default(),
            recipient_email: config.recipient_email.clone().unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    fn request(&self, message: &MailMessage) -> Result<SendRequest, RelayError> {
        let credentials = self.credentials.as_ref().ok_or(RelayError::NotConfigured)?;
        Ok(SendRequest {
            service_id: credentials.service_id.clone(),
            template_id: credentials.template_id.clone(),
            user_id: credentials.public_key.clone(),
            template_params: TemplateParams {
                from_name: message.from_name.clone(),
                from_email: message.from_email.clone(),
                to_name: self.recipient_name.clone(),
                to_email: self.recipient_email.clone(),
                message: message.message.clone(),
            },
        })
    }
}

impl MailRelay for EmailJsRelay {
    fn send(
        &self,
        message: &MailMessage,
    ) -> impl Future<Output = Result<(), RelayError>> + Send + 'static {
        let endpoint = self.endpoint.clone();
        let request = self.request(message);

        async move {
            let request = request?;

            let client = reqwest::Client::builder()
                .timeout(Duration::from_secs(RELAY_TIMEOUT_SECS))
                .user_agent(concat!("Folio/", env!("CARGO_PKG_VERSION")))
                .build()
                .map_err(|e| RelayError::Transport(e.to_string()))?;

            let response = client
                .post(&endpoint)
                .json(&request)
                .send()
                .await
                .map_err(|e| RelayError::Transport(e.to_string()))?;

            let status = response.status();
            if status.is_success() {
                log::info!("Contact message accepted by relay ({status})");
                return Ok(());
            }

            let message = response.text().await.unwrap_or_default();
            log::warn!("Contact message rejected by relay ({status}): {message}");
            Err(RelayError::Rejected {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn configured(endpoint: &str) -> ContactConfig {
        ContactConfig {
            endpoint: Some(endpoint.to_string()),
            service_id: Some("service_portfolio".into()),
            template_id: Some("template_contact".into()),
            public_key: Some("pk_123".into()),
            recipient_name: Some("Alex".into()),
            recipient_email: Some("alex@example.com".into()),
        }
    }

    fn message() -> MailMessage {
        MailMessage {
            from_name: "Sam".into(),
            from_email: "sam@example.org".into(),
            message: "Hello there".into(),
        }
    }

    /// Serves a single HTTP request with the given status line and body,
    /// returning the raw request it received.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let address = listener.local_addr().expect("address");

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut received = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = socket.read(&mut chunk).await.expect("read");
                if n == 0 {
                    break;
                }
                received.extend_from_slice(&chunk[..n]);
                let text = String::from_utf8_lossy(&received);
                if let Some(split) = text.find("\r\n\r\n") {
                    let length = text[..split]
                        .lines()
                        .find_map(|line| {
                            let (name, value) = line.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if received.len() >= split + 4 + length {
                        break;
                    }
                }
            }

            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.expect("write");
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&received).into_owned()
        });

        (format!("http://{address}/api/v1.0/email/send"), handle)
    }

    #[test]
    fn blank_credentials_leave_relay_unconfigured() {
        let mut config = configured("http://localhost");
        config.public_key = Some("   ".into());
        assert!(!EmailJsRelay::from_config(&config).is_configured());
        assert!(!EmailJsRelay::from_config(&ContactConfig::default()).is_configured());
    }

    #[test]
    fn request_body_uses_relay_field_names() {
        let relay = EmailJsRelay::from_config(&configured("http://localhost"));
        let body = serde_json::to_value(relay.request(&message()).expect("configured"))
            .expect("serializable");

        assert_eq!(body["service_id"], "service_portfolio");
        assert_eq!(body["template_id"], "template_contact");
        assert_eq!(body["user_id"], "pk_123");
        assert_eq!(body["template_params"]["from_name"], "Sam");
        assert_eq!(body["template_params"]["from_email"], "sam@example.org");
        assert_eq!(body["template_params"]["to_name"], "Alex");
        assert_eq!(body["template_params"]["to_email"], "alex@example.com");
        assert_eq!(body["template_params"]["message"], "Hello there");
    }

    #[tokio::test]
    async fn unconfigured_relay_fails_without_network() {
        let relay = EmailJsRelay::from_config(&ContactConfig::default());
        assert_eq!(relay.send(&message()).await, Err(RelayError::NotConfigured));
    }

    #[tokio::test]
    async fn success_status_is_accepted() {
        let (endpoint, server) = serve_once("200 OK", "OK").await;
        let relay = EmailJsRelay::from_config(&configured(&endpoint));

        assert_eq!(relay.send(&message()).await, Ok(()));

        let request = server.await.expect("server task");
        assert!(request.starts_with("POST /api/v1.0/email/send"));
        assert!(request.contains("\"user_id\":\"pk_123\""));
    }

    #[tokio::test]
    async fn error_status_carries_response_text() {
        let (endpoint, server) =
            serve_once("400 Bad Request", "The Public Key is invalid").await;
        let relay = EmailJsRelay::from_config(&configured(&endpoint));

        let result = relay.send(&message()).await;
        server.await.expect("server task");

        assert_eq!(
            result,
            Err(RelayError::Rejected {
                status: 400,
                message: "The Public Key is invalid".into(),
            })
        );
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        // Bind then drop to get a port nothing listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let address = listener.local_addr().expect("address");
        drop(listener);

        let relay = EmailJsRelay::from_config(&configured(&format!("http://{address}/send")));
        assert!(matches!(
            relay.send(&message()).await,
            Err(RelayError::Transport(_))
        ));
    }
}
