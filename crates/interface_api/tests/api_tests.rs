//! End-to-end tests of the HTTP API against the real router

use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot`

use core_kernel::FixedClock;
use interface_api::{
    config::ApiConfig,
    error::{
        CUSTOMER_ALREADY_EXISTS, CUSTOMER_NOT_FOUND, INSUFFICIENT_FUNDS, INTERNAL_ERROR,
        INVALID_DATE,
    },
    identification::TAX_ID_HEADER,
    router_with_state, AppState,
};
use test_utils::TemporalFixtures;

fn test_app_with_config(config: ApiConfig) -> (Router, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(TemporalFixtures::morning()));
    let state = AppState::new(config, clock.clone());
    (router_with_state(state), clock)
}

fn test_app() -> (Router, Arc<FixedClock>) {
    test_app_with_config(ApiConfig::default())
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    tax_id: Option<&str>,
    body: Option<Value>,
) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(tax_id) = tax_id {
        builder = builder.header(TAX_ID_HEADER, tax_id);
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body)?))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, value))
}

async fn create(app: &Router, cpf: &str, name: &str) -> Result<(StatusCode, Value)> {
    send(app, Method::POST, "/account", None, Some(json!({ "cpf": cpf, "name": name }))).await
}

async fn deposit(
    app: &Router,
    cpf: &str,
    description: &str,
    amount: Value,
) -> Result<(StatusCode, Value)> {
    send(
        app,
        Method::POST,
        "/deposit",
        Some(cpf),
        Some(json!({ "description": description, "amount": amount })),
    )
    .await
}

async fn withdraw(app: &Router, cpf: &str, amount: Value) -> Result<(StatusCode, Value)> {
    send(app, Method::POST, "/withdraw", Some(cpf), Some(json!({ "amount": amount }))).await
}

fn error_body(message: &str) -> Value {
    json!({ "error": message })
}

mod accounts {
    use super::*;

    #[tokio::test]
    async fn test_walkthrough_from_creation_to_overdraft() -> Result<()> {
        let (app, _clock) = test_app();

        assert_eq!(create(&app, "111", "Ana").await?, (StatusCode::CREATED, Value::Null));
        assert_eq!(deposit(&app, "111", "salary", json!(1000)).await?.0, StatusCode::CREATED);
        assert_eq!(withdraw(&app, "111", json!(1000)).await?.0, StatusCode::CREATED);

        let (status, body) = withdraw(&app, "111", json!(1)).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, error_body(INSUFFICIENT_FUNDS));

        let (status, account) = send(&app, Method::GET, "/account", Some("111"), None).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(account["cpf"], "111");
        assert_eq!(account["name"], "Ana");
        assert!(uuid::Uuid::parse_str(account["id"].as_str().unwrap()).is_ok());
        assert_eq!(account["statement"].as_array().unwrap().len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_tax_id_is_rejected() -> Result<()> {
        let (app, _clock) = test_app();

        assert_eq!(create(&app, "111", "Ana").await?.0, StatusCode::CREATED);
        let (status, body) = create(&app, "111", "Another Ana").await?;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, error_body(CUSTOMER_ALREADY_EXISTS));

        let (_, account) = send(&app, Method::GET, "/account", Some("111"), None).await?;
        assert_eq!(account["name"], "Ana");
        Ok(())
    }

    #[tokio::test]
    async fn test_update_renames_without_touching_identity() -> Result<()> {
        let (app, _clock) = test_app();
        create(&app, "111", "Ana").await?;
        deposit(&app, "111", "salary", json!(10)).await?;
        let (_, before) = send(&app, Method::GET, "/account", Some("111"), None).await?;

        let (status, body) = send(
            &app,
            Method::PUT,
            "/account",
            Some("111"),
            Some(json!({ "name": "Ana Maria" })),
        )
        .await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::Null);

        let (_, after) = send(&app, Method::GET, "/account", Some("111"), None).await?;
        assert_eq!(after["name"], "Ana Maria");
        assert_eq!(after["id"], before["id"]);
        assert_eq!(after["cpf"], before["cpf"]);
        assert_eq!(after["statement"], before["statement"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_returns_remaining_customers() -> Result<()> {
        let (app, _clock) = test_app();
        create(&app, "111", "Ana").await?;
        create(&app, "222", "Bruno").await?;
        create(&app, "333", "Carla").await?;
        deposit(&app, "333", "gift", json!(5)).await?;

        let (status, remaining) = send(&app, Method::DELETE, "/account", Some("222"), None).await?;
        assert_eq!(status, StatusCode::OK);

        let remaining = remaining.as_array().unwrap();
        let cpfs: Vec<_> = remaining.iter().map(|c| c["cpf"].as_str().unwrap()).collect();
        assert_eq!(cpfs, vec!["111", "333"]);
        assert_eq!(remaining[1]["statement"].as_array().unwrap().len(), 1);

        let (status, body) = send(&app, Method::GET, "/statement", Some("222"), None).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, error_body(CUSTOMER_NOT_FOUND));
        Ok(())
    }

    #[tokio::test]
    async fn test_deleting_last_customer_returns_empty_list() -> Result<()> {
        let (app, _clock) = test_app();
        create(&app, "111", "Ana").await?;

        let (status, remaining) = send(&app, Method::DELETE, "/account", Some("111"), None).await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(remaining, json!([]));
        Ok(())
    }
}

mod identification {
    use super::*;

    #[tokio::test]
    async fn test_protected_routes_require_known_customer() -> Result<()> {
        let (app, _clock) = test_app();
        create(&app, "111", "Ana").await?;

        let routes = [
            (Method::GET, "/statement", None),
            (Method::GET, "/statement/date?date=2024-03-10", None),
            (Method::GET, "/account", None),
            (Method::PUT, "/account", Some(json!({ "name": "Intruder" }))),
            (Method::DELETE, "/account", None),
            (Method::POST, "/deposit", Some(json!({ "description": "x", "amount": 10 }))),
            (Method::POST, "/withdraw", Some(json!({ "amount": 1 }))),
        ];
        for (method, uri, request) in routes {
            for tax_id in [None, Some("999")] {
                let (status, body) =
                    send(&app, method.clone(), uri, tax_id, request.clone()).await?;
                assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {uri} {tax_id:?}");
                assert_eq!(body, error_body(CUSTOMER_NOT_FOUND));
            }
        }

        let (_, account) = send(&app, Method::GET, "/account", Some("111"), None).await?;
        assert_eq!(account["name"], "Ana");
        assert_eq!(account["statement"], json!([]));
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_customer_rejected_before_body_is_read() -> Result<()> {
        let (app, _clock) = test_app();

        let request = Request::builder()
            .method(Method::POST)
            .uri("/deposit")
            .header(TAX_ID_HEADER, "999")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))?;
        let response = app.clone().oneshot(request).await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let body: Value = serde_json::from_slice(&bytes)?;
        assert_eq!(body, error_body(CUSTOMER_NOT_FOUND));
        Ok(())
    }

    #[tokio::test]
    async fn test_tax_id_match_is_exact() -> Result<()> {
        let (app, _clock) = test_app();
        create(&app, "abc", "Ana").await?;

        let (status, _) = send(&app, Method::GET, "/account", Some("ABC"), None).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, Method::GET, "/account", Some("abc"), None).await?;
        assert_eq!(status, StatusCode::OK);
        Ok(())
    }

    #[tokio::test]
    async fn test_create_account_needs_no_header() -> Result<()> {
        let (app, _clock) = test_app();

        let (status, _) = send(
            &app,
            Method::POST,
            "/account",
            Some("does-not-matter"),
            Some(json!({ "cpf": "111", "name": "Ana" })),
        )
        .await?;

        assert_eq!(status, StatusCode::CREATED);
        Ok(())
    }
}

mod statements {
    use super::*;

    #[tokio::test]
    async fn test_statement_wire_shape() -> Result<()> {
        let (app, _clock) = test_app();
        create(&app, "111", "Ana").await?;
        deposit(&app, "111", "salary", json!(1000.5)).await?;
        withdraw(&app, "111", json!("250.25")).await?;

        let (status, statement) = send(&app, Method::GET, "/statement", Some("111"), None).await?;
        assert_eq!(status, StatusCode::OK);

        let expected_at = TemporalFixtures::morning()
            .to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true);
        assert_eq!(
            statement,
            json!([
                {
                    "description": "salary",
                    "amount": 1000.5,
                    "createdAt": expected_at,
                    "type": "credit",
                },
                {
                    "description": "Saque",
                    "amount": 250.25,
                    "createdAt": expected_at,
                    "type": "debit",
                },
            ])
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_statement_of_new_account_is_empty() -> Result<()> {
        let (app, _clock) = test_app();
        create(&app, "111", "Ana").await?;

        let (status, statement) = send(&app, Method::GET, "/statement", Some("111"), None).await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(statement, json!([]));
        Ok(())
    }

    #[tokio::test]
    async fn test_statement_by_date_filters_calendar_day() -> Result<()> {
        let (app, clock) = test_app();
        create(&app, "111", "Ana").await?;

        clock.set(TemporalFixtures::morning());
        deposit(&app, "111", "morning", json!(1)).await?;
        clock.set(TemporalFixtures::next_morning());
        deposit(&app, "111", "next", json!(2)).await?;
        clock.set(TemporalFixtures::late_evening());
        deposit(&app, "111", "evening", json!(3)).await?;

        let (status, day) =
            send(&app, Method::GET, "/statement/date?date=2024-03-10", Some("111"), None).await?;
        assert_eq!(status, StatusCode::OK);
        let descriptions: Vec<_> = day
            .as_array()
            .unwrap()
            .iter()
            .map(|op| op["description"].as_str().unwrap())
            .collect();
        assert_eq!(descriptions, vec!["morning", "evening"]);

        let (status, empty) =
            send(&app, Method::GET, "/statement/date?date=2024-03-09", Some("111"), None).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(empty, json!([]));
        Ok(())
    }

    #[tokio::test]
    async fn test_statement_by_date_uses_configured_timezone() -> Result<()> {
        let config = ApiConfig {
            timezone: TemporalFixtures::sao_paulo(),
            ..ApiConfig::default()
        };
        let (app, clock) = test_app_with_config(config);
        create(&app, "111", "Ana").await?;

        // 01:00 UTC on the 11th is 22:00 on the 10th in Sao Paulo
        clock.set(TemporalFixtures::next_morning() - chrono::Duration::hours(8));
        deposit(&app, "111", "late", json!(1)).await?;

        let tenth_uri = "/statement/date?date=2024-03-10";
        let eleventh_uri = "/statement/date?date=2024-03-11";
        let (_, tenth) = send(&app, Method::GET, tenth_uri, Some("111"), None).await?;
        let (_, eleventh) = send(&app, Method::GET, eleventh_uri, Some("111"), None).await?;

        assert_eq!(tenth.as_array().unwrap().len(), 1);
        assert_eq!(eleventh, json!([]));
        Ok(())
    }

    #[tokio::test]
    async fn test_statement_by_date_rejects_bad_dates() -> Result<()> {
        let (app, _clock) = test_app();
        create(&app, "111", "Ana").await?;

        for uri in [
            "/statement/date",
            "/statement/date?date=",
            "/statement/date?date=10/03/2024",
            "/statement/date?date=2024-13-01",
        ] {
            let (status, body) = send(&app, Method::GET, uri, Some("111"), None).await?;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body, error_body(INVALID_DATE));
        }
        Ok(())
    }
}

mod amounts {
    use super::*;

    #[tokio::test]
    async fn test_deposit_past_decimal_range_is_refused() -> Result<()> {
        let (app, _clock) = test_app();
        create(&app, "111", "Ana").await?;
        let half_of_range = json!("50000000000000000000000000000");

        let (status, _) = deposit(&app, "111", "first", half_of_range.clone()).await?;
        assert_eq!(status, StatusCode::CREATED);
        let (status, body) = deposit(&app, "111", "second", half_of_range).await?;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, error_body(INTERNAL_ERROR));

        // The refused credit left nothing behind and the account still works
        assert_eq!(withdraw(&app, "111", json!(1)).await?.0, StatusCode::CREATED);
        let (status, statement) = send(&app, Method::GET, "/statement", Some("111"), None).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(statement.as_array().unwrap().len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_bodies_get_error_envelope() -> Result<()> {
        let (app, _clock) = test_app();
        create(&app, "111", "Ana").await?;

        let requests = [
            (Method::POST, "/deposit", json!({ "description": "no amount" })),
            (Method::POST, "/withdraw", json!({ "amount": "lots" })),
            (Method::PUT, "/account", json!({})),
            (Method::POST, "/account", json!({ "cpf": "222" })),
        ];
        for (method, uri, request) in requests {
            let (status, body) =
                send(&app, method.clone(), uri, Some("111"), Some(request)).await?;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {uri}");
            assert!(body["error"].as_str().is_some_and(|m| !m.is_empty()), "{method} {uri}");
        }

        let (_, statement) = send(&app, Method::GET, "/statement", Some("111"), None).await?;
        assert_eq!(statement, json!([]));
        Ok(())
    }

    #[tokio::test]
    async fn test_body_without_json_content_type_gets_error_envelope() -> Result<()> {
        let (app, _clock) = test_app();
        create(&app, "111", "Ana").await?;

        let request = Request::builder()
            .method(Method::POST)
            .uri("/deposit")
            .header(TAX_ID_HEADER, "111")
            .body(Body::from(r#"{"description":"x","amount":1}"#))?;
        let response = app.clone().oneshot(request).await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let body: Value = serde_json::from_slice(&bytes)?;
        assert!(body["error"].is_string());
        Ok(())
    }
}

mod concurrency {
    use super::*;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_withdrawals_never_overdraw() -> Result<()> {
        let (app, _clock) = test_app();
        create(&app, "111", "Ana").await?;
        deposit(&app, "111", "seed", json!(500)).await?;

        let mut tasks = Vec::new();
        for _ in 0..20 {
            let app = app.clone();
            tasks.push(tokio::spawn(async move { withdraw(&app, "111", json!(100)).await }));
        }

        let mut accepted = 0;
        for task in tasks {
            let (status, _) = task.await??;
            if status == StatusCode::CREATED {
                accepted += 1;
            }
        }
        assert_eq!(accepted, 5);

        let (_, statement) = send(&app, Method::GET, "/statement", Some("111"), None).await?;
        assert_eq!(statement.as_array().unwrap().len(), 6);
        Ok(())
    }
}

mod ambient {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_customer_count() -> Result<()> {
        let (app, _clock) = test_app();
        create(&app, "111", "Ana").await?;

        let (status, body) = send(&app, Method::GET, "/health", None, None).await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["customers"], 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_request_id_is_returned() -> Result<()> {
        let (app, _clock) = test_app();

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/health").body(Body::empty())?)
            .await?;
        let generated = response.headers().get("x-request-id");
        assert!(generated.is_some_and(|v| !v.is_empty()));

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("x-request-id", "abc-123")
                    .body(Body::empty())?,
            )
            .await?;
        assert_eq!(
            response.headers().get("x-request-id").and_then(|v| v.to_str().ok()),
            Some("abc-123")
        );
        Ok(())
    }
}
