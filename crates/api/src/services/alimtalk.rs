//! AlimTalk dispatch and reconciliation service.
//!
//! Carries the template-driven bulk notification pipeline:
//! content validation against template variables, batch dispatch through
//! the gateway, persistence of the paired request/response, and ingestion
//! of the gateway's asynchronous delivery results.

use std::sync::Arc;

use domain::models::content::{SaveContentRequest, SaveContentResponse};
use domain::models::result::{ResultDetailPayload, ResultDetailWithClient, SendResultPayload};
use domain::models::send::{DispatchItem, SendAlimtalkResponse, SendContext};
use domain::models::Send;
use domain::services::{
    content_matches_template, GatewayResponse, TalkGateway, TalkGatewayError, TalkSendRequest,
};
use persistence::entities::{ClientEntity, ContentEntity, GroupEntity, TemplateEntity};
use persistence::repositories::send::NewSendResponse;
use persistence::repositories::{
    ClientRepository, ContentRepository, GroupRepository, ResultRepository, SendRepository,
    TemplateRepository,
};
use sqlx::PgPool;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::middleware::metrics::{record_messages_dispatched, record_results_ingested};

/// Errors surfaced by the dispatch pipeline.
#[derive(Debug, Error)]
pub enum AlimtalkError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Gateway(#[from] TalkGatewayError),
}

/// Service driving content validation, dispatch and result ingestion.
pub struct AlimtalkService {
    pool: PgPool,
    gateway: Arc<dyn TalkGateway>,
}

impl AlimtalkService {
    /// Create a new service over the given pool and gateway.
    pub fn new(pool: PgPool, gateway: Arc<dyn TalkGateway>) -> Self {
        Self { pool, gateway }
    }

    /// Validate content against its template and persist it.
    ///
    /// The referenced client and template must exist, and the payload
    /// fields must supply every variable the template declares. The
    /// match check itself is pure; only accepted content is stored.
    pub async fn save_content(
        &self,
        request: &SaveContentRequest,
    ) -> Result<SaveContentResponse, AlimtalkError> {
        let client_repo = ClientRepository::new(self.pool.clone());
        let template_repo = TemplateRepository::new(self.pool.clone());
        let content_repo = ContentRepository::new(self.pool.clone());

        client_repo
            .find_by_id(request.client_id)
            .await?
            .ok_or_else(|| AlimtalkError::NotFound("Client not found".to_string()))?;

        let template = template_repo
            .find_by_code(&request.template_code)
            .await?
            .ok_or_else(|| AlimtalkError::NotFound("Template not found".to_string()))?;

        let declared = template_repo.variable_names(template.id).await?;
        content_matches_template(&declared, &request.fields)
            .map_err(|e| AlimtalkError::Validation(e.to_string()))?;

        let fields = serde_json::Value::Object(request.fields.clone());
        let content = content_repo
            .create_content(request.client_id, template.id, &fields)
            .await?;

        info!(
            content_id = %content.id,
            client_id = %content.client_id,
            template_code = %request.template_code,
            "Content stored"
        );

        Ok(SaveContentResponse {
            content_id: content.id,
            client_id: content.client_id,
            template_id: content.template_id,
        })
    }

    /// Dispatch a batch and persist one Send row per tuple.
    pub async fn send_alimtalk(
        &self,
        items: &[DispatchItem],
    ) -> Result<SendAlimtalkResponse, AlimtalkError> {
        let response = self.dispatch(items).await?;
        let sends = self.save_send_response(&response, items).await?;

        record_messages_dispatched(items.len());

        Ok(SendAlimtalkResponse {
            message: "Dispatch request accepted".to_string(),
            aligo_result: response,
            sends,
        })
    }

    /// Resolve every tuple and submit the batch as one gateway call.
    ///
    /// Resolution is all-or-nothing: any missing record fails the whole
    /// batch before the gateway is contacted, so a failed batch leaves no
    /// partial side effects. Gateway failures surface unmodified; no
    /// retry is attempted.
    pub async fn dispatch(
        &self,
        items: &[DispatchItem],
    ) -> Result<GatewayResponse, AlimtalkError> {
        let client_repo = ClientRepository::new(self.pool.clone());
        let content_repo = ContentRepository::new(self.pool.clone());
        let template_repo = TemplateRepository::new(self.pool.clone());
        let group_repo = GroupRepository::new(self.pool.clone());

        let mut requests = Vec::with_capacity(items.len());
        for item in items {
            // The four lookups of one tuple run concurrently; all are
            // awaited before any is checked.
            let (client, content, template, group) = tokio::join!(
                client_repo.find_by_id(item.client_id),
                content_repo.find_by_id(item.content_id),
                template_repo.find_by_id(item.template_id),
                group_repo.find_by_id(item.group_id),
            );

            let resolved = (client?, content?, template?, group?);
            let (Some(client), Some(content), Some(template), Some(group)) = resolved else {
                return Err(AlimtalkError::NotFound(
                    "Client, content, template or group could not be resolved".to_string(),
                ));
            };

            requests.push(build_send_request(&client, &content, &template, &group));
        }

        let response = self.gateway.send_alimtalk(&requests).await?;

        info!(
            batch_size = items.len(),
            mid = %response.info.mid,
            "Dispatch batch accepted by gateway"
        );

        Ok(response)
    }

    /// Persist one Send row per tuple, each pairing the tuple with the
    /// shared synchronous gateway response. Rows are returned in input
    /// order.
    pub async fn save_send_response(
        &self,
        response: &GatewayResponse,
        items: &[DispatchItem],
    ) -> Result<Vec<Send>, AlimtalkError> {
        let send_repo = SendRepository::new(self.pool.clone());

        let new_response = NewSendResponse {
            code: response.code,
            message: &response.message,
            mid: &response.info.mid,
            success_count: response.info.scnt,
            fail_count: response.info.fcnt,
        };

        let mut sends = Vec::with_capacity(items.len());
        for item in items {
            let send = send_repo.create_send(item, &new_response).await?;
            sends.push(send.into());
        }

        Ok(sends)
    }

    /// Ingest batch-level delivery results.
    ///
    /// Each result is matched to an existing Send by its gateway batch id;
    /// matched sends are updated and returned, unknown `mid`s are skipped
    /// without fabricating rows. Storage errors propagate: per-item
    /// skipping applies only to unmatched ids, never to failures.
    pub async fn reconcile_sends(
        &self,
        results: &[SendResultPayload],
    ) -> Result<Vec<Send>, AlimtalkError> {
        let send_repo = SendRepository::new(self.pool.clone());

        let mut reconciled = Vec::new();
        for result in results {
            if send_repo.find_by_mid(&result.mid).await?.is_none() {
                debug!(mid = %result.mid, "No send matches result; skipping");
                continue;
            }

            send_repo
                .update_send_result(
                    &result.mid,
                    result.msg_count,
                    &result.msg_content,
                    &result.send_state,
                    &result.send_date,
                )
                .await?;

            if let Some(updated) = send_repo.find_by_mid(&result.mid).await? {
                reconciled.push(updated.into());
            }
        }

        record_results_ingested(reconciled.len());
        Ok(reconciled)
    }

    /// Resolve the send context used to correlate per-recipient results
    /// arriving for a group.
    pub async fn get_send_context_by_group(
        &self,
        group_id: Uuid,
    ) -> Result<SendContext, AlimtalkError> {
        let send_repo = SendRepository::new(self.pool.clone());

        let send = send_repo
            .find_latest_by_group(group_id)
            .await?
            .ok_or_else(|| AlimtalkError::NotFound("No send found for group".to_string()))?;

        Ok(SendContext {
            send_id: send.id,
            client_id: send.client_id,
            template_id: send.template_id,
            mid: send.mid,
        })
    }

    /// Ingest per-recipient delivery results, idempotently by `msgid`.
    ///
    /// A result whose `msgid` is already known returns the existing
    /// joined record untouched; a replayed callback is a no-op. New
    /// results create the detail row and its join to the send context
    /// atomically. One record is returned per input, in input order.
    pub async fn reconcile_details(
        &self,
        results: &[ResultDetailPayload],
        context: &SendContext,
    ) -> Result<Vec<ResultDetailWithClient>, AlimtalkError> {
        let result_repo = ResultRepository::new(self.pool.clone());

        let mut reconciled = Vec::with_capacity(results.len());
        for result in results {
            let existing = result_repo.find_detail_by_msgid(&result.msgid).await?;

            if existing.is_none() {
                result_repo
                    .create_detail_with_client(result, context.send_id, context.client_id)
                    .await?;
            } else {
                debug!(msgid = %result.msgid, "Result already ingested; returning existing record");
            }

            let joined = result_repo
                .find_joined_by_msgid(&result.msgid)
                .await?
                .ok_or_else(|| {
                    AlimtalkError::NotFound("Delivery result not found".to_string())
                })?;
            reconciled.push(joined.into());
        }

        record_results_ingested(reconciled.len());
        Ok(reconciled)
    }
}

/// Build one gateway parameter set from a resolved dispatch tuple.
fn build_send_request(
    client: &ClientEntity,
    content: &ContentEntity,
    template: &TemplateEntity,
    group: &GroupEntity,
) -> TalkSendRequest {
    TalkSendRequest {
        template_code: template.code.clone(),
        receiver: client.contact.clone(),
        recvname: client.client_name.clone(),
        subject: group.group_name.clone(),
        message: template.content.clone(),
        talk_send_data: content.fields.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn test_build_send_request_maps_resolved_entities() {
        let now = Utc::now();
        let client = ClientEntity {
            id: Uuid::new_v4(),
            client_name: "Kim Dawoon".to_string(),
            contact: "010-1234-5678".to_string(),
            client_email: None,
            created_at: now,
            updated_at: now,
        };
        let content = ContentEntity {
            id: Uuid::new_v4(),
            client_id: client.id,
            template_id: Uuid::new_v4(),
            fields: json!({"name": "Kim Dawoon", "date": "2024-01-01"}),
            created_at: now,
            updated_at: now,
        };
        let template = TemplateEntity {
            id: content.template_id,
            code: "WELCOME01".to_string(),
            content: "#{name}님, 환영합니다".to_string(),
            created_at: now,
            updated_at: now,
        };
        let group = GroupEntity {
            id: Uuid::new_v4(),
            group_name: "Welcome batch".to_string(),
            created_at: now,
            updated_at: now,
        };

        let request = build_send_request(&client, &content, &template, &group);

        assert_eq!(request.receiver, client.contact);
        assert_eq!(request.recvname, client.client_name);
        assert_eq!(request.subject, group.group_name);
        assert_eq!(request.template_code, template.code);
        assert_eq!(request.message, template.content);
        assert_eq!(request.talk_send_data, content.fields);
    }
}
