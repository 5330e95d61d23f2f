use greeting_server::serve;
use reqwest::StatusCode;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;

/// Start a test server in the background
async fn start_test_server() -> (String, tokio::task::JoinHandle<()>) {
    let addr = SocketAddr::from(([127, 0, 0, 1], 0)); // Random port
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        serve(listener).await.unwrap();
    });

    (base_url, handle)
}

#[tokio::test]
async fn http_hello_latency() {
    let (base_url, _server) = start_test_server().await;
    let client = reqwest::Client::new();
    let iterations = 50;

    println!("\n=== HTTP GET /api/hello Latency ===");

    let mut total = std::time::Duration::ZERO;
    for _ in 0..iterations {
        let start = Instant::now();
        let response = client
            .get(format!("{}/api/hello", base_url))
            .send()
            .await
            .unwrap();
        let elapsed = start.elapsed();

        assert_eq!(response.status(), StatusCode::OK);
        total += elapsed;
    }

    println!("Average: {:?}", total / iterations);
}

#[tokio::test]
async fn http_concurrent_requests() {
    let (base_url, _server) = start_test_server().await;
    let client = Arc::new(reqwest::Client::new());
    let num_requests = 50;

    println!("\n=== HTTP Concurrent Requests ===");

    let start = Instant::now();
    let mut tasks = JoinSet::new();

    for i in 0..num_requests {
        let client = Arc::clone(&client);
        let base_url = base_url.clone();

        tasks.spawn(async move {
            let url = match i % 2 {
                0 => format!("{}/api/hello/user-{}", base_url, i),
                _ => format!("{}/hello/user-{}", base_url, i),
            };
            let response = client.get(&url).send().await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let body = response.text().await.unwrap();
            assert!(body.contains(&format!("Hello, user-{}!", i)));
        });
    }

    while let Some(result) = tasks.join_next().await {
        result.unwrap();
    }

    let elapsed = start.elapsed();
    let ops_per_sec = num_requests as f64 / elapsed.as_secs_f64();

    println!("Requests: {}", num_requests);
    println!("Mix: 50% text, 50% html");
    println!("Total time: {:?}", elapsed);
    println!("Throughput: {:.2} req/sec", ops_per_sec);
}
