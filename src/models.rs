// src/models.rs

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Who authored a transcript message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A citation attached to an assistant message, pointing back at an
/// ingested document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceRef {
    pub label: String,
    pub url: String,
}

/// A single entry in the conversation transcript. Immutable once appended.
#[derive(Clone, Debug)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub sources: Vec<SourceRef>,
    pub timestamp: DateTime<Local>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Message {
            role: Role::User,
            content: content.into(),
            sources: Vec::new(),
            timestamp: Local::now(),
        }
    }

    pub fn assistant(content: impl Into<String>, sources: Vec<SourceRef>) -> Self {
        Message {
            role: Role::Assistant,
            content: content.into(),
            sources,
            timestamp: Local::now(),
        }
    }
}

/// One role+content turn as sent to the backend. Citations are stripped
/// before a transcript entry crosses the wire.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl From<&Message> for ChatTurn {
    fn from(message: &Message) -> Self {
        ChatTurn {
            role: message.role,
            content: message.content.clone(),
        }
    }
}

/// Request body for `POST /ingest`.
#[derive(Clone, Debug, Serialize)]
pub struct IngestRequest {
    pub urls: Vec<String>,
}

/// Success body for `POST /ingest`. A missing count means zero inserts,
/// not a malformed response.
#[derive(Clone, Debug, Deserialize)]
pub struct IngestResponse {
    #[serde(default)]
    pub inserted: u64,
}

/// Request body for `POST /query`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct QueryRequest {
    pub query: String,
    pub top_k: u32,
    pub with_answer: bool,
    pub chat_history: Vec<ChatTurn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources_filter: Option<Vec<String>>,
}

/// Response body for `POST /query`. Only the fields the widget renders are
/// modeled; everything else the backend sends is ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct QueryResponse {
    pub answer: Option<String>,
    #[serde(default)]
    pub results: Vec<ResultChunk>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ResultChunk {
    #[serde(default)]
    pub metadata: ChunkMetadata,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ChunkMetadata {
    pub source: Option<String>,
}

/// The shaped outcome of a successful query, ready for the transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryReply {
    pub answer: String,
    pub sources: Vec<SourceRef>,
}

impl QueryReply {
    /// Reduces a raw query response to the answer text and up to five
    /// numbered citations.
    pub fn from_response(response: QueryResponse) -> Self {
        let sources = response
            .results
            .iter()
            .take(crate::constants::TOP_K as usize)
            .enumerate()
            .map(|(idx, chunk)| {
                let source = chunk.metadata.source.as_deref();
                SourceRef {
                    label: format!("[{}] {}", idx + 1, source.unwrap_or("unknown")),
                    url: source.unwrap_or("#").to_string(),
                }
            })
            .collect();

        QueryReply {
            answer: response
                .answer
                .unwrap_or_else(|| "(no answer)".to_string()),
            sources,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(source: Option<String>) -> ResultChunk {
        ResultChunk {
            metadata: ChunkMetadata { source },
        }
    }

    #[test]
    fn reply_builds_numbered_citations() {
        let reply = QueryReply::from_response(QueryResponse {
            answer: Some("42".to_string()),
            results: vec![
                chunk(Some("docA".to_string())),
                chunk(Some("docB".to_string())),
            ],
        });

        assert_eq!(reply.answer, "42");
        assert_eq!(
            reply.sources,
            vec![
                SourceRef {
                    label: "[1] docA".to_string(),
                    url: "docA".to_string(),
                },
                SourceRef {
                    label: "[2] docB".to_string(),
                    url: "docB".to_string(),
                },
            ]
        );
    }

    #[test]
    fn reply_falls_back_for_missing_fields() {
        let reply = QueryReply::from_response(QueryResponse {
            answer: None,
            results: vec![chunk(None)],
        });

        assert_eq!(reply.answer, "(no answer)");
        assert_eq!(reply.sources[0].label, "[1] unknown");
        assert_eq!(reply.sources[0].url, "#");
    }

    #[test]
    fn reply_keeps_at_most_five_results() {
        let results = (0..8).map(|i| chunk(Some(format!("doc{i}")))).collect();
        let reply = QueryReply::from_response(QueryResponse {
            answer: Some("ok".to_string()),
            results,
        });

        assert_eq!(reply.sources.len(), 5);
        assert_eq!(reply.sources[4].label, "[5] doc4");
    }

    #[test]
    fn chat_turn_strips_citations() {
        let message = Message::assistant(
            "see docs",
            vec![SourceRef {
                label: "[1] docA".to_string(),
                url: "docA".to_string(),
            }],
        );

        let turn = ChatTurn::from(&message);
        assert_eq!(turn.role, Role::Assistant);
        assert_eq!(turn.content, "see docs");
    }

    #[test]
    fn roles_serialize_lowercase() {
        let turn = ChatTurn {
            role: Role::User,
            content: "hi".to_string(),
        };
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json["role"], "user");
    }
}
