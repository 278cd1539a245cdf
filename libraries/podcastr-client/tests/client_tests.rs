//! Tests for the episodes API client.
//!
//! These tests use mock servers to verify client behavior without
//! requiring a running episodes API.

use chrono::Locale;
use podcastr_client::{ApiConfig, ClientError, EpisodeClient, EpisodeListing};
use podcastr_core::{CoreError, EpisodeFilters, EpisodeSource, SortField, SortOrder};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn episode_json(id: &str, published_at: &str, duration: serde_json::Value) -> serde_json::Value {
    json!({
        "id": id,
        "title": format!("Episode {}", id),
        "members": "Diego Fernandes, Rodrigo Gonçalves",
        "published_at": published_at,
        "thumbnail": format!("https://example.com/{}.jpg", id),
        "description": "<p>Show notes</p>",
        "file": {
            "url": format!("https://example.com/{}.m4a", id),
            "type": "audio/x-m4a",
            "duration": duration
        }
    })
}

fn client_for(server: &MockServer) -> EpisodeClient {
    EpisodeClient::new(ApiConfig::new(server.uri()).with_locale(Locale::en_US)).unwrap()
}

// =============================================================================
// Client Creation Tests
// =============================================================================

mod client_creation {
    use super::*;

    #[test]
    fn test_valid_http_url() {
        assert!(EpisodeClient::new(ApiConfig::new("http://localhost:3333")).is_ok());
    }

    #[test]
    fn test_valid_https_url() {
        assert!(EpisodeClient::new(ApiConfig::new("https://api.example.com")).is_ok());
    }

    #[test]
    fn test_empty_url_rejected() {
        let result = EpisodeClient::new(ApiConfig::new(""));

        match result.unwrap_err() {
            ClientError::InvalidUrl(msg) => assert!(msg.contains("empty")),
            other => panic!("Expected InvalidUrl error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_scheme_rejected() {
        let result = EpisodeClient::new(ApiConfig::new("localhost:3333"));

        match result.unwrap_err() {
            ClientError::InvalidUrl(msg) => assert!(msg.contains("http")),
            other => panic!("Expected InvalidUrl error, got {:?}", other),
        }
    }
}

// =============================================================================
// Episode List Tests
// =============================================================================

mod fetch_episodes {
    use super::*;

    #[tokio::test]
    async fn test_sends_home_page_query() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes"))
            .and(query_param("_limit", "12"))
            .and(query_param("_sort", "published_at"))
            .and(query_param("_order", "desc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                episode_json("newest", "2021-01-22 10:00:00", json!(3981)),
                episode_json("older", "2021-01-08 16:30:00", json!("1200")),
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let episodes = client_for(&server)
            .fetch_episodes(&EpisodeFilters::default())
            .await
            .unwrap();

        assert_eq!(episodes.len(), 2);
        assert_eq!(episodes[0].id, "newest");
        assert_eq!(episodes[0].duration_seconds, 3981);
        assert_eq!(episodes[0].published_at, "22 Jan 21");
        assert_eq!(episodes[0].audio_url, "https://example.com/newest.m4a");
        assert_eq!(episodes[1].duration_seconds, 1200);
        assert_eq!(episodes[1].published_at, "8 Jan 21");
    }

    #[tokio::test]
    async fn test_custom_sort_and_limit() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes"))
            .and(query_param("_limit", "3"))
            .and(query_param("_sort", "title"))
            .and(query_param("_order", "asc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let filters = EpisodeFilters {
            limit: Some(3),
            sort: SortField::Title,
            order: SortOrder::Asc,
        };
        let episodes = client_for(&server).fetch_episodes(&filters).await.unwrap();
        assert!(episodes.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_record_fails_whole_fetch() {
        let server = MockServer::start().await;

        let mut broken = episode_json("broken", "2021-01-08 16:30:00", json!(10));
        broken["file"]
            .as_object_mut()
            .unwrap()
            .remove("duration");

        Mock::given(method("GET"))
            .and(path("/episodes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                episode_json("fine", "2021-01-22 10:00:00", json!(60)),
                broken,
            ])))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .fetch_episodes(&EpisodeFilters::default())
            .await;

        match result.unwrap_err() {
            ClientError::MalformedEpisode { id, reason } => {
                assert_eq!(id, "broken");
                assert!(reason.contains("duration"));
            }
            other => panic!("Expected MalformedEpisode error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unparseable_date_is_malformed() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([episode_json(
                "bad-date",
                "last tuesday",
                json!(60)
            )])))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .fetch_episodes(&EpisodeFilters::default())
            .await;

        assert!(matches!(
            result,
            Err(ClientError::MalformedEpisode { ref id, .. }) if id == "bad-date"
        ));
    }

    #[tokio::test]
    async fn test_server_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .fetch_episodes(&EpisodeFilters::default())
            .await;

        match result.unwrap_err() {
            ClientError::ServerError { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("Expected ServerError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .fetch_episodes(&EpisodeFilters::default())
            .await;

        assert!(matches!(result, Err(ClientError::ParseError(_))));
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let client = EpisodeClient::new(ApiConfig::new("http://127.0.0.1:1")).unwrap();

        let result = client.fetch_episodes(&EpisodeFilters::default()).await;

        assert!(matches!(result, Err(ClientError::ServerUnreachable(_))));
    }
}

// =============================================================================
// Episode Detail Tests
// =============================================================================

mod fetch_episode {
    use super::*;

    #[tokio::test]
    async fn test_fetches_by_id() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes/a-importancia-da-contribuicao-em-open-source"))
            .respond_with(ResponseTemplate::new(200).set_body_json(episode_json(
                "a-importancia-da-contribuicao-em-open-source",
                "2021-01-22 10:00:00",
                json!(3981),
            )))
            .expect(1)
            .mount(&server)
            .await;

        let episode = client_for(&server)
            .fetch_episode("a-importancia-da-contribuicao-em-open-source")
            .await
            .unwrap();

        assert_eq!(episode.duration_seconds, 3981);
        assert_eq!(episode.description.as_deref(), Some("<p>Show notes</p>"));
    }

    #[tokio::test]
    async fn test_missing_episode() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes/nope"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({})))
            .mount(&server)
            .await;

        let result = client_for(&server).fetch_episode("nope").await;

        assert!(matches!(result, Err(ClientError::NotFound(ref id)) if id == "nope"));
    }
}

// =============================================================================
// EpisodeSource Tests
// =============================================================================

mod episode_source {
    use super::*;

    async fn fetch_through_trait(source: &dyn EpisodeSource) -> podcastr_core::Result<usize> {
        Ok(source.fetch_episodes(&EpisodeFilters::default()).await?.len())
    }

    #[tokio::test]
    async fn test_trait_object_fetch() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                episode_json("a", "2021-01-22 10:00:00", json!(60)),
                episode_json("b", "2021-01-21 10:00:00", json!(60)),
                episode_json("c", "2021-01-20 10:00:00", json!(60)),
            ])))
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert_eq!(fetch_through_trait(&client).await, Ok(3));

        let episodes = client
            .fetch_episodes(&EpisodeFilters::default())
            .await
            .unwrap();
        let listing = EpisodeListing::split(episodes, 2);
        assert_eq!(listing.latest.len(), 2);
        assert_eq!(listing.all[0].id, "c");
    }

    #[tokio::test]
    async fn test_errors_map_to_core_errors() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = fetch_through_trait(&client).await;

        assert!(matches!(result, Err(CoreError::Source(_))));
    }
}
