//! HTTP/1.1 shell.
//!
//! A small HTTP/1.1 server layer that feeds parsed requests into the
//! dispatch loop and writes its responses back out, with keep-alive support.
//!
//! - **`parser`**: parses incoming requests from byte buffers
//! - **`request`**: request representation plus the accessors the framework
//!   consumes (path info, query/form parameters, cookies)
//! - **`response`**: status code/text, header map, and body string
//! - **`connection`**: per-connection state machine driving one request to
//!   completion at a time
//! - **`writer`**: serializes and writes responses to the client
//!
//! # Connection state machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for incoming request data
//!        └──────┬──────┘
//!               │ Request received
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Session load → dispatch loop → session persist
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ├─ Keep-Alive → Reading (same connection)
//!               └─ Close → Closed
//! ```

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
