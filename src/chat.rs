use crate::constants::TOP_K;
use crate::models::{ChatTurn, Message, QueryReply, QueryRequest};

/// Everything the widget owns: the transcript, the active source set, the
/// two input buffers, and the in-flight flags. Nothing here survives a
/// restart.
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    pub question_input: String,
    pub url_input: String,
    pub transcript: Vec<Message>,
    /// Ingested sources, duplicate-free, in first-insertion order.
    pub indexed_sources: Vec<String>,
    pub query_busy: bool,
    pub ingest_busy: bool,
    pub ingest_status: Option<String>,
}

/// An input to the state machine: a user action or the completion of a
/// previously emitted effect.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// User triggered ingestion of whatever is in the URL buffer.
    IngestSubmitted,
    /// An ingest request finished; `outcome` carries the inserted count or
    /// an error message.
    IngestResolved {
        urls: Vec<String>,
        outcome: Result<u64, String>,
    },
    /// User sent the current question buffer.
    QuerySubmitted,
    /// A query finished. `question` is echoed back so the transcript pair
    /// can be appended in one transition.
    QueryResolved {
        question: String,
        outcome: Result<QueryReply, String>,
    },
    /// User cleared the sources filter.
    SourcesCleared,
}

/// An outbound request the shell must execute. The payload is fully built at
/// emit time; nothing is re-read from state later.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Ingest { urls: Vec<String> },
    Query { question: String, request: QueryRequest },
}

/// Pure update function: applies an event to state and returns any effects.
pub fn update(mut state: ChatState, event: Event) -> (ChatState, Vec<Effect>) {
    let effects = match event {
        Event::IngestSubmitted => {
            let urls = parse_urls(&state.url_input);
            if urls.is_empty() {
                state.ingest_status = Some("Add at least one valid URL.".to_string());
                Vec::new()
            } else {
                state.ingest_busy = true;
                state.ingest_status = None;
                vec![Effect::Ingest { urls }]
            }
        }
        Event::IngestResolved { urls, outcome } => {
            state.ingest_busy = false;
            match outcome {
                Ok(inserted) => {
                    state.ingest_status = Some(format!("Indexed {} chunk(s).", inserted));
                    // An attempted ingest marks a source active even when the
                    // server inserted nothing for it.
                    for url in urls {
                        if !state.indexed_sources.contains(&url) {
                            state.indexed_sources.push(url);
                        }
                    }
                }
                Err(message) => {
                    state.ingest_status = Some(format!("Error: {}", message));
                }
            }
            Vec::new()
        }
        Event::QuerySubmitted => {
            let question = state.question_input.trim().to_string();
            if question.is_empty() {
                Vec::new()
            } else {
                // Optimistic clear: the buffer empties before the request
                // resolves.
                state.question_input.clear();
                state.query_busy = true;
                let request = QueryRequest {
                    query: question.clone(),
                    top_k: TOP_K,
                    with_answer: true,
                    chat_history: state.transcript.iter().map(ChatTurn::from).collect(),
                    sources_filter: if state.indexed_sources.is_empty() {
                        None
                    } else {
                        Some(state.indexed_sources.clone())
                    },
                };
                vec![Effect::Query { question, request }]
            }
        }
        Event::QueryResolved { question, outcome } => {
            state.query_busy = false;
            let assistant = match outcome {
                Ok(reply) => Message::assistant(reply.answer, reply.sources),
                Err(message) => Message::assistant(format!("Error: {}", message), Vec::new()),
            };
            // Question and outcome land in the same transition; the
            // transcript never shows a question without a response after it.
            state.transcript.push(Message::user(question));
            state.transcript.push(assistant);
            Vec::new()
        }
        Event::SourcesCleared => {
            state.indexed_sources.clear();
            Vec::new()
        }
    };

    (state, effects)
}

fn parse_urls(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(ToOwned::to_owned).collect()
}
