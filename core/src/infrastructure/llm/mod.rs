pub mod chat_completions_client;
