use distinct_palette::{
    ColorApiClient, ColorLookup, FailurePolicy, HslQuery, LookupError, SampleError, SampleOptions,
    Sampler, StopReason,
};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

/// Serves `respond(request_target) -> (status line, body)` for each connection and
/// reports every request target on the returned channel.
async fn serve<F>(respond: F) -> (String, mpsc::UnboundedReceiver<String>)
where
    F: Fn(&str) -> (&'static str, String) + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let request = String::from_utf8_lossy(&request).into_owned();
            let target = request
                .split_whitespace()
                .nth(1)
                .unwrap_or_default()
                .to_string();

            let (status, body) = respond(&target);
            let _ = tx.send(target);
            let response = format!(
                "HTTP/1.1 {status}\r\n\
                 content-type: application/json\r\n\
                 content-length: {}\r\n\
                 connection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (base, rx)
}

fn hue_of(target: &str) -> u16 {
    let query = target.split("hsl=").nth(1).unwrap_or_default();
    let hue = query.split(',').next().unwrap_or_default();
    hue.parse().unwrap_or(0)
}

/// A service answer naming `name` and echoing `echoed_hue` in its `hsl` block.
fn color_json(name: &str, echoed_hue: u16) -> String {
    json!({
        "name": {
            "value": name,
            "closest_named_hex": "#000000",
            "exact_match_name": false,
            "distance": 12
        },
        "hex": {"value": "#123456", "clean": "123456"},
        "hsl": {"h": echoed_hue, "s": 100, "l": 50}
    })
    .to_string()
}

#[tokio::test]
async fn lookup_parses_service_response() {
    let (base, mut requests) =
        serve(|target| ("200 OK", color_json("Azure", hue_of(target)))).await;
    let client = ColorApiClient::new(base);

    let record = client.lookup(HslQuery::new(210, 100.0, 50.0)).await.unwrap();
    assert_eq!(record.name(), "Azure");
    assert_eq!(record.echoed_hue(), 210.0);
    assert_eq!(record.sampled_hue, Some(210));
    assert_eq!(record.hex.value, "#123456");
    assert_eq!(requests.recv().await.unwrap(), "/id?hsl=210,100%,50%");
}

#[tokio::test]
async fn lookup_keeps_requested_hue_for_greys() {
    // Achromatic colors come back with h = 0 whatever hue was asked for.
    let (base, _requests) = serve(|_| ("200 OK", color_json("Grey", 0))).await;
    let client = ColorApiClient::new(base);

    let record = client.lookup(HslQuery::new(215, 0.0, 50.0)).await.unwrap();
    assert_eq!(record.echoed_hue(), 0.0);
    assert_eq!(record.sampled_hue, Some(215));
}

#[tokio::test]
async fn non_success_status_is_a_service_error() {
    let (base, _requests) = serve(|_| ("503 Service Unavailable", String::new())).await;
    let client = ColorApiClient::new(base);

    let err = client.lookup(HslQuery::new(0, 50.0, 50.0)).await.unwrap_err();
    match err {
        LookupError::Service { status, .. } => assert_eq!(status.as_u16(), 503),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn body_without_name_is_malformed() {
    let without_name = r##"{"hex": {"value": "#000000"}}"##;
    let (base, _requests) = serve(move |_| ("200 OK", without_name.to_string())).await;
    let client = ColorApiClient::new(base);

    let err = client.lookup(HslQuery::new(0, 50.0, 50.0)).await.unwrap_err();
    assert!(matches!(err, LookupError::Malformed { .. }), "{err:?}");
}

#[tokio::test]
async fn body_that_is_not_json_is_malformed() {
    let (base, _requests) = serve(|_| ("200 OK", "<html>busy</html>".to_string())).await;
    let client = ColorApiClient::new(base);

    let err = client.lookup(HslQuery::new(0, 50.0, 50.0)).await.unwrap_err();
    assert!(matches!(err, LookupError::Malformed { .. }), "{err:?}");
}

#[tokio::test]
async fn unreachable_service_is_a_network_error() {
    // Bind and drop to get a port nobody listens on.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = ColorApiClient::new(format!("http://127.0.0.1:{port}"));

    let err = client.lookup(HslQuery::new(0, 50.0, 50.0)).await.unwrap_err();
    assert!(matches!(err, LookupError::Network { .. }), "{err:?}");
}

#[tokio::test]
async fn sampler_stops_when_service_runs_out_of_names() {
    // Hues below 60 get their own name, everything after is "Magenta".
    let (base, mut requests) = serve(|target| {
        let hue = hue_of(target);
        let name = if hue < 60 {
            format!("Hue {hue}")
        } else {
            "Magenta".to_string()
        };
        ("200 OK", color_json(&name, hue))
    })
    .await;
    let sampler = Sampler::with_options(
        ColorApiClient::new(base),
        SampleOptions {
            step: 20,
            max_consecutive_repeats: 3,
            on_failure: FailurePolicy::Abort,
        },
    );

    let outcome = sampler.run(100.0, 50.0).await.unwrap();
    let names: Vec<&str> = outcome.colors.iter().map(|c| c.name()).collect();
    assert_eq!(names, ["Hue 0", "Hue 20", "Hue 40", "Magenta"]);
    assert_eq!(outcome.stop, StopReason::RepeatsExhausted);
    assert_eq!(outcome.hues_queried, 7);

    let mut hues = Vec::new();
    while let Ok(target) = requests.try_recv() {
        hues.push(hue_of(&target));
    }
    assert_eq!(hues, [0, 20, 40, 60, 80, 100, 120]);
}

#[tokio::test]
async fn sampler_aborts_on_service_error() {
    let (base, _requests) = serve(|target| {
        let hue = hue_of(target);
        if hue == 90 {
            ("500 Internal Server Error", String::new())
        } else {
            ("200 OK", color_json(&format!("Hue {hue}"), hue))
        }
    })
    .await;
    let sampler = Sampler::with_options(
        ColorApiClient::new(base),
        SampleOptions {
            step: 45,
            ..SampleOptions::default()
        },
    );

    let err = sampler.sample(100.0, 50.0).await.unwrap_err();
    assert!(matches!(
        err,
        SampleError::Lookup {
            hue: 90,
            source: LookupError::Service { .. }
        }
    ));
}
