use std::sync::Arc;

use employee_server::{Config, InMemoryEmployeeRepository, Server, ServerState};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

#[tokio::test]
async fn test_port_zero_reports_assigned_address() {
    let mut config = Config::in_memory();
    config.http_host = "127.0.0.1".into();
    config.http_port = 0;
    let state =
        ServerState::with_repository(config.clone(), Arc::new(InMemoryEmployeeRepository::new()));

    let bound = Server::new(config, state).bind().await.unwrap();
    let addr = bound.local_addr();
    assert!(addr.ip().is_loopback());
    assert_ne!(addr.port(), 0);

    tokio::spawn(bound.serve());

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();
    let response = String::from_utf8_lossy(&raw);
    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    assert!(response.contains("\"status\":\"ok\""));
}
