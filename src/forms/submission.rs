use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;
use web_sys::RequestMode;

use crate::config;
use crate::forms::template::FieldValues;

/// Payload posted to the webhook. Lives only until the request settles.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    pub name: String,
    pub email: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to encode submission: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("request to {endpoint} failed: {reason}")]
    Network { endpoint: String, reason: String },
}

/// Sends a record somewhere. The response body and status are never read.
pub trait Transport {
    fn post(
        &self,
        endpoint: &'static str,
        record: &SubmissionRecord,
    ) -> LocalBoxFuture<'static, Result<(), SubmitError>>;
}

/// Posts JSON to the spreadsheet webhook in `no-cors` mode.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebhookTransport;

impl Transport for WebhookTransport {
    fn post(
        &self,
        endpoint: &'static str,
        record: &SubmissionRecord,
    ) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let body = serde_json::to_string(record);
        Box::pin(async move {
            let body = body?;
            Request::post(endpoint)
                .mode(RequestMode::NoCors)
                .header("Content-Type", "application/json")
                .body(body)
                .send()
                .await
                .map_err(|e| SubmitError::Network {
                    endpoint: endpoint.to_string(),
                    reason: e.to_string(),
                })?;
            Ok(())
        })
    }
}

/// A record paired with the endpoint it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub endpoint: &'static str,
    pub record: SubmissionRecord,
}

impl Submission {
    pub fn new(action_label: &str, values: &FieldValues) -> Self {
        let field = |name: &str| values.get(name).cloned().unwrap_or_default();

        let mut record = SubmissionRecord {
            name: field("name"),
            email: field("email"),
            category: action_label.to_string(),
            company: None,
            message: None,
        };

        if action_label == config::CONTACT_LABEL {
            record.company = Some(field("companyName"));
            record.message = Some(field("message"));
        }

        Self {
            endpoint: config::endpoint_for(action_label),
            record,
        }
    }

    /// Hands the record to `transport` and swallows the outcome into the log.
    /// The returned future never fails.
    pub fn deliver<T: Transport + ?Sized>(self, transport: &T) -> LocalBoxFuture<'static, ()> {
        let pending = transport.post(self.endpoint, &self.record);
        let category = self.record.category;
        Box::pin(async move {
            match pending.await {
                Ok(()) => log::info!("Submitted {} form", category),
                Err(e) => log::error!("Error submitting form: {}", e),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future;
    use std::cell::RefCell;

    use crate::forms::panel::PanelView;
    use crate::forms::template::FormTemplate;

    #[derive(Default)]
    struct RecordingTransport {
        offline: bool,
        sent: RefCell<Vec<(&'static str, SubmissionRecord)>>,
    }

    impl Transport for RecordingTransport {
        fn post(
            &self,
            endpoint: &'static str,
            record: &SubmissionRecord,
        ) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
            self.sent.borrow_mut().push((endpoint, record.clone()));
            let result = if self.offline {
                Err(SubmitError::Network {
                    endpoint: endpoint.to_string(),
                    reason: "offline".to_string(),
                })
            } else {
                Ok(())
            };
            Box::pin(future::ready(result))
        }
    }

    fn values(pairs: &[(&str, &str)]) -> FieldValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn waitlist_submission_posts_simple_body_to_primary_endpoint() {
        let transport = RecordingTransport::default();
        let form = values(&[("name", "Jane Doe"), ("email", "jane@x.com")]);

        let view = PanelView::Summary.show_form();
        let submission = Submission::new("Join Waitlist", &form);
        let delivery = submission.deliver(&transport);
        let view = view.submit();
        block_on(delivery);

        assert_eq!(view, PanelView::Success);
        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, config::PRIMARY_ENDPOINT);
        assert_eq!(
            serde_json::to_value(&sent[0].1).unwrap(),
            serde_json::json!({
                "name": "Jane Doe",
                "email": "jane@x.com",
                "category": "Join Waitlist"
            })
        );
    }

    #[test]
    fn contact_submission_carries_company_and_message() {
        let transport = RecordingTransport::default();
        let form = FormTemplate::contact().collect(|name| {
            Some(
                match name {
                    "name" => "Jane Doe",
                    "email" => "jane@x.com",
                    "companyName" => "Acme Corp",
                    "message" => "We would like to talk.",
                    _ => "",
                }
                .to_string(),
            )
        });

        block_on(Submission::new("Contact Us", &form).deliver(&transport));

        let sent = transport.sent.borrow();
        assert_eq!(sent[0].0, config::CONTACT_ENDPOINT);
        assert_eq!(
            serde_json::to_value(&sent[0].1).unwrap(),
            serde_json::json!({
                "name": "Jane Doe",
                "email": "jane@x.com",
                "category": "Contact Us",
                "company": "Acme Corp",
                "message": "We would like to talk."
            })
        );
    }

    #[test]
    fn simple_variant_never_serializes_contact_keys() {
        // Extra inputs on the page must not leak into non-contact payloads.
        let form = values(&[
            ("name", "Jane"),
            ("email", "jane@x.com"),
            ("companyName", "Acme"),
            ("message", "hi"),
        ]);
        for label in ["Join Waitlist", "Apply to Advise"] {
            let record = Submission::new(label, &form).record;
            let json = serde_json::to_value(&record).unwrap();
            let object = json.as_object().unwrap();
            assert!(!object.contains_key("company"));
            assert!(!object.contains_key("message"));
            assert_eq!(object["category"], label);
        }
    }

    #[test]
    fn contact_message_defaults_to_empty_when_left_blank() {
        let form = values(&[("name", "Jane"), ("email", "jane@x.com"), ("companyName", "Acme")]);
        let record = Submission::new("Contact Us", &form).record;
        assert_eq!(record.company.as_deref(), Some("Acme"));
        assert_eq!(record.message.as_deref(), Some(""));
    }

    #[test]
    fn offline_delivery_is_logged_and_view_still_succeeds() {
        let transport = RecordingTransport {
            offline: true,
            ..Default::default()
        };
        let form = values(&[("name", "Jane Doe"), ("email", "jane@x.com")]);

        let delivery = Submission::new("Join Waitlist", &form).deliver(&transport);
        let view = PanelView::Form.submit();
        block_on(delivery);

        assert_eq!(view, PanelView::Success);
        assert_eq!(transport.sent.borrow().len(), 1);
    }

    #[test]
    fn cancelling_sends_nothing() {
        let transport = RecordingTransport::default();
        let view = PanelView::Summary.show_form().cancel();
        assert_eq!(view, PanelView::Summary);
        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn network_error_names_the_endpoint() {
        let err = SubmitError::Network {
            endpoint: "https://example.test/hook".into(),
            reason: "offline".into(),
        };
        assert_eq!(err.to_string(), "request to https://example.test/hook failed: offline");
    }
}
