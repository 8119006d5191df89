//! Request-scoped metadata example
//!
//! Demonstrates binding one scope per inbound request, attaching request
//! metadata mid-flight, serializing request/response summaries, and child
//! loggers that inherit the scope.
//!
//! Run with: cargo run --example request_scope

use bff_logging::config::{
    serialize_request, serialize_response, RequestInfo, ResponseInfo, HEADER_MACHINE_ID,
    HEADER_RESPONSE_TIME, HEADER_TOTAL_TIME,
};
use bff_logging::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

fn handle_request(sink: Arc<Logger>, request_id: &str, machine_id: &str) {
    // One scope per request; every wrapper serving it gets the same handle
    let scope = RequestScope::new();
    scope.set("request_id", request_id);

    let mut controller = ContextLogger::with_context(Arc::clone(&sink), "OrderController");
    controller.bind_scope(scope.clone());

    controller.info("request received");

    // Middleware discovers more metadata later in the request lifecycle
    controller.add_metadata(Metadata::new().with("machine_id", machine_id));

    // A repository wrapper bound to the same scope sees the same fields
    let mut repository = ContextLogger::with_context(Arc::clone(&sink), "OrderRepository");
    repository.bind_scope(scope);
    repository.debug("loading order from store");

    // Child loggers inherit the scope alongside their own bindings
    let audit = controller.child(Metadata::new().with("channel", "audit"));
    audit.info("order state change recorded");

    controller.info("request completed");
}

fn main() -> Result<()> {
    println!("=== BFF Logging - Request Scope Example ===\n");

    let options = logger_options(&RuntimeSettings::default());
    let sink = Arc::new(options.build());
    sink.set_level(LogLevel::Trace);

    println!("1. Two concurrent requests with isolated scopes:");
    let mut handles = vec![];
    for (request_id, machine_id) in [("req-100", "m-east-1"), ("req-200", "m-west-2")] {
        let sink = Arc::clone(&sink);
        handles.push(thread::spawn(move || {
            handle_request(sink, request_id, machine_id);
        }));
    }
    for handle in handles {
        handle.join().expect("request thread panicked");
    }

    println!("\n2. Request and response summaries:");
    let access = ContextLogger::with_context(Arc::clone(&sink), "AccessLog");

    let request = RequestInfo {
        method: "POST".to_string(),
        url: "/orders?expand=items".to_string(),
        params: HashMap::from([("expand".to_string(), "items".to_string())]),
        headers: HashMap::from([(HEADER_MACHINE_ID.to_string(), "m-east-1".to_string())]),
    };
    access.info((
        Metadata::new().with("req", serialize_request(&request)),
        "inbound request",
    ));

    let response = ResponseInfo {
        status_code: 201,
        headers: HashMap::from([
            (HEADER_RESPONSE_TIME.to_string(), "12".to_string()),
            (HEADER_TOTAL_TIME.to_string(), "15".to_string()),
        ]),
    };
    access.info((
        Metadata::new().with("res", serialize_response(&response)),
        "request completed",
    ));

    access.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
