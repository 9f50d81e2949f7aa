//! HTTP routes.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;

use storyloom_domain::{
    DramaLevel, Mood, NarrationRequest, Profile, Story, StoryComment, StoryId,
};
use storyloom_shared::{
    AddCommentRequest, ContinueRequest, ErrorResponse, LikeResponse, LikeStoryRequest,
    ListStoriesQuery, NarrationResponse, ShareStoryRequest, UpdateProfileRequest,
};

use crate::app::App;
use crate::use_cases::narration::NarrationError;
use crate::use_cases::profile::ProfileError;
use crate::use_cases::storyboard::StoryboardError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    // A panic while narrating still answers with fallback text.
    let narration = Router::new()
        .route("/api/continue", post(continue_narration))
        .route("/narration/continue", post(continue_narration))
        .route_layer(CatchPanicLayer::custom(super::narration_panic_response));

    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .merge(narration)
        .route("/api/stories", get(list_stories).post(share_story))
        .route("/api/stories/{id}", get(get_story))
        .route(
            "/api/stories/{id}/comments",
            get(list_comments).post(add_comment),
        )
        .route("/api/stories/{id}/like", post(like_story))
        .route(
            "/api/profiles/{client_id}",
            get(get_profile).put(update_profile),
        )
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Narration
// =============================================================================

async fn continue_narration(
    State(app): State<Arc<App>>,
    payload: Result<Json<ContinueRequest>, JsonRejection>,
) -> Result<Json<NarrationResponse>, NarrationFailure> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Unreadable narration request");
        NarrationFailure::Internal
    })?;

    let text = app
        .use_cases
        .narration
        .continue_story
        .execute(narration_request(body))
        .await
        .map_err(NarrationFailure::from)?;

    Ok(Json(NarrationResponse { text }))
}

fn narration_request(body: ContinueRequest) -> NarrationRequest {
    NarrationRequest {
        history: body.history.unwrap_or_default(),
        user_turn: coerce_text(body.user_turn.as_ref()).unwrap_or_default(),
        mood: Mood::from_raw(coerce_text(body.mood.as_ref()).as_deref()),
        drama: DramaLevel::from_raw(coerce_text(body.drama.as_ref()).as_deref()),
    }
}

/// Text form of a loosely typed request field. `null` counts as absent.
///
/// Whole numbers use their integer spelling, so `4` and `4.0` both read as
/// `"4"`. Arrays and objects become their JSON text.
fn coerce_text(raw: Option<&Value>) -> Option<String> {
    match raw? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(
            n.as_i64()
                .map(|i| i.to_string())
                .or_else(|| {
                    n.as_f64()
                        .filter(|f| f.fract() == 0.0 && f.abs() < 1e15)
                        .map(|f| (f as i64).to_string())
                })
                .unwrap_or_else(|| n.to_string()),
        ),
        other => Some(other.to_string()),
    }
}

/// Narration failure envelope: always 500, always with fallback text.
#[derive(Debug)]
pub enum NarrationFailure {
    /// The completion call failed; message carries the upstream diagnostic.
    Service(String),
    /// Anything else.
    Internal,
}

impl From<NarrationError> for NarrationFailure {
    fn from(err: NarrationError) -> Self {
        tracing::error!(error = %err, "Narration failed");
        NarrationFailure::Service(err.to_string())
    }
}

impl IntoResponse for NarrationFailure {
    fn into_response(self) -> Response {
        let error = match self {
            NarrationFailure::Service(msg) => msg,
            NarrationFailure::Internal => "Server error".to_string(),
        };
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::narration(error)),
        )
            .into_response()
    }
}

// =============================================================================
// Stories
// =============================================================================

async fn list_stories(
    State(app): State<Arc<App>>,
    Query(query): Query<ListStoriesQuery>,
) -> Result<Json<Vec<Story>>, ApiError> {
    let stories = app.use_cases.storyboard.stories.list(query.limit).await?;
    Ok(Json(stories))
}

async fn get_story(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Story>, ApiError> {
    let story = app
        .use_cases
        .storyboard
        .stories
        .get(parse_story_id(&id)?)
        .await?;
    Ok(Json(story))
}

async fn share_story(
    State(app): State<Arc<App>>,
    payload: Result<Json<ShareStoryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Story>), ApiError> {
    let Json(body) = payload?;
    let story = app
        .use_cases
        .storyboard
        .stories
        .share(
            body.title.as_deref(),
            body.content.as_deref(),
            body.author.as_deref(),
            body.handle.as_deref(),
        )
        .await?;
    Ok((StatusCode::CREATED, Json(story)))
}

// =============================================================================
// Comments & Likes
// =============================================================================

async fn list_comments(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<StoryComment>>, ApiError> {
    let comments = app
        .use_cases
        .storyboard
        .comments
        .list(parse_story_id(&id)?)
        .await?;
    Ok(Json(comments))
}

async fn add_comment(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    payload: Result<Json<AddCommentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<StoryComment>), ApiError> {
    let story_id = parse_story_id(&id)?;
    let Json(body) = payload?;
    let comment = app
        .use_cases
        .storyboard
        .comments
        .add(story_id, body.body.as_deref(), body.author.as_deref())
        .await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

async fn like_story(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    payload: Result<Json<LikeStoryRequest>, JsonRejection>,
) -> Result<Json<LikeResponse>, ApiError> {
    let story_id = parse_story_id(&id)?;
    let Json(body) = payload?;
    let likes = app
        .use_cases
        .storyboard
        .like
        .execute(story_id, body.client_id.as_deref())
        .await?;
    Ok(Json(LikeResponse { likes }))
}

// =============================================================================
// Profiles
// =============================================================================

async fn get_profile(
    State(app): State<Arc<App>>,
    Path(client_id): Path<String>,
) -> Result<Json<Profile>, ApiError> {
    let profile = app.use_cases.profile.ops.get(&client_id).await?;
    Ok(Json(profile))
}

async fn update_profile(
    State(app): State<Arc<App>>,
    Path(client_id): Path<String>,
    payload: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> Result<Json<Profile>, ApiError> {
    let Json(body) = payload?;
    let profile = app
        .use_cases
        .profile
        .ops
        .set_nickname(&client_id, body.nickname.as_deref())
        .await?;
    Ok(Json(profile))
}

fn parse_story_id(raw: &str) -> Result<StoryId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid story id: {raw}")))
}

// =============================================================================
// Errors
// =============================================================================

/// Storyboard and profile error envelope.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<StoryboardError> for ApiError {
    fn from(err: StoryboardError) -> Self {
        match err {
            StoryboardError::Validation(msg) => ApiError::BadRequest(msg),
            StoryboardError::StoryNotFound => ApiError::NotFound(err.to_string()),
            StoryboardError::Repo(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<ProfileError> for ApiError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::Validation(msg) => ApiError::BadRequest(msg),
            ProfileError::NotFound => ApiError::NotFound(err.to_string()),
            ProfileError::Repo(e) => ApiError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Repositories;
    use crate::infrastructure::ports::{
        CompletionError, MockCommentRepo, MockCompletionPort, MockProfileRepo, MockReactionRepo,
        MockStoryRepo, RepoError,
    };
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use chrono::Utc;
    use storyloom_domain::ClientId;
    use tower::ServiceExt;

    #[derive(Default)]
    struct Mocks {
        completion: MockCompletionPort,
        story: MockStoryRepo,
        comment: MockCommentRepo,
        reaction: MockReactionRepo,
        profile: MockProfileRepo,
    }

    impl Mocks {
        fn router(self) -> Router {
            let app = App::new(
                Arc::new(self.completion),
                Repositories {
                    story: Arc::new(self.story),
                    comment: Arc::new(self.comment),
                    reaction: Arc::new(self.reaction),
                    profile: Arc::new(self.profile),
                },
            );
            crate::api::router(Arc::new(app), None)
        }
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ));
        (status, json)
    }

    fn output_text(text: &str) -> Result<String, CompletionError> {
        Ok(serde_json::json!({ "output_text": text }).to_string())
    }

    // -------------------------------------------------------------------------
    // Narration
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn health_is_ok() {
        let router = Mocks::default().router();
        let request = Request::builder().uri("/api/health").body(Body::empty()).unwrap();
        let (status, body) = send(router, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::String("OK".into()));
    }

    #[tokio::test]
    async fn continue_returns_clean_text_unmodified() {
        let mut mocks = Mocks::default();
        mocks
            .completion
            .expect_complete()
            .times(1)
            .returning(|_| output_text("The door creaks open, revealing a dim corridor."));

        let (status, body) = send(
            mocks.router(),
            json_request(
                Method::POST,
                "/api/continue",
                serde_json::json!({
                    "history": [],
                    "userTurn": "I open the door.",
                    "mood": "default",
                    "drama": 3
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({"text": "The door creaks open, revealing a dim corridor."})
        );
    }

    #[tokio::test]
    async fn continue_is_also_mounted_under_narration() {
        let mut mocks = Mocks::default();
        mocks
            .completion
            .expect_complete()
            .returning(|_| output_text("You walk on."));

        let (status, body) = send(
            mocks.router(),
            json_request(Method::POST, "/narration/continue", serde_json::json!({})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["text"], "You walk on.");
    }

    #[tokio::test]
    async fn out_of_range_drama_uses_level_three() {
        let mut mocks = Mocks::default();
        mocks
            .completion
            .expect_complete()
            .withf(|r| {
                r.temperature == 0.70
                    && r.messages[0]
                        .text()
                        .is_some_and(|t| t.ends_with(DramaLevel::Balanced.instruction()))
            })
            .times(1)
            .returning(|_| output_text("Fine."));

        let (status, _) = send(
            mocks.router(),
            json_request(
                Method::POST,
                "/api/continue",
                serde_json::json!({"userTurn": "Go.", "drama": "9"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn numeric_drama_five_is_theatrical() {
        let mut mocks = Mocks::default();
        mocks
            .completion
            .expect_complete()
            .withf(|r| r.temperature == 1.0)
            .times(1)
            .returning(|_| output_text("Thunder!"));

        let (status, _) = send(
            mocks.router(),
            json_request(
                Method::POST,
                "/api/continue",
                serde_json::json!({"userTurn": "Go.", "drama": 5}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn upstream_failure_returns_fallback_envelope() {
        let mut mocks = Mocks::default();
        mocks.completion.expect_complete().returning(|_| {
            Err(CompletionError::Upstream {
                status: 500,
                body: "upstream exploded".to_string(),
            })
        });

        let (status, body) = send(
            mocks.router(),
            json_request(Method::POST, "/api/continue", serde_json::json!({"userTurn": "Hi"})),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("upstream exploded"));
        assert_eq!(body["text"], "(Server fallback)");
    }

    #[tokio::test]
    async fn unreadable_body_returns_fallback_envelope() {
        let router = Mocks::default().router();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/continue")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let (status, body) = send(router, request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            serde_json::json!({"error": "Server error", "text": "(Server fallback)"})
        );
    }

    #[tokio::test]
    async fn unknown_history_role_is_forwarded() {
        let mut mocks = Mocks::default();
        mocks
            .completion
            .expect_complete()
            .withf(|r| {
                r.messages.len() == 4
                    && serde_json::to_value(&r.messages[1]).unwrap()
                        == serde_json::json!({"role": "developer", "content": "hi"})
                    && serde_json::to_value(&r.messages[2]).unwrap()
                        == serde_json::json!({"role": "user"})
                    && r.messages[3].text() == Some("x")
            })
            .times(1)
            .returning(|_| output_text("Noted."));

        let (status, body) = send(
            mocks.router(),
            json_request(
                Method::POST,
                "/api/continue",
                serde_json::json!({
                    "history": [{"role": "developer", "content": "hi"}, {"role": "user"}],
                    "userTurn": "x"
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({"text": "Noted."}));
    }

    #[tokio::test]
    async fn numeric_user_turn_and_mood_are_read_as_text() {
        let mut mocks = Mocks::default();
        mocks
            .completion
            .expect_complete()
            .withf(|r| {
                r.messages.last().and_then(|m| m.text()) == Some("42")
                    && r.messages[0].text().is_some_and(|t| t.contains("Mood: 7."))
            })
            .times(1)
            .returning(|_| output_text("Forty-two."));

        let (status, _) = send(
            mocks.router(),
            json_request(
                Method::POST,
                "/api/continue",
                serde_json::json!({"userTurn": 42, "mood": 7}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn panic_while_narrating_keeps_fallback_text() {
        for uri in ["/api/continue", "/narration/continue"] {
            let mut mocks = Mocks::default();
            mocks
                .completion
                .expect_complete()
                .returning(|_| panic!("adapter bug"));

            let (status, body) = send(
                mocks.router(),
                json_request(Method::POST, uri, serde_json::json!({})),
            )
            .await;

            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
            assert_eq!(
                body,
                serde_json::json!({"error": "Server error", "text": "(Server fallback)"}),
                "{uri}"
            );
        }
    }

    #[tokio::test]
    async fn panic_elsewhere_has_no_fallback_text() {
        let mut mocks = Mocks::default();
        mocks
            .story
            .expect_list()
            .returning(|_| panic!("adapter bug"));

        let request = Request::builder().uri("/api/stories").body(Body::empty()).unwrap();
        let (status, body) = send(mocks.router(), request).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({"error": "Server error"}));
    }

    #[test]
    fn text_coercion_covers_every_json_kind() {
        use serde_json::json;
        assert_eq!(coerce_text(None), None);
        assert_eq!(coerce_text(Some(&json!(null))), None);
        assert_eq!(coerce_text(Some(&json!("2"))).as_deref(), Some("2"));
        assert_eq!(coerce_text(Some(&json!(1))).as_deref(), Some("1"));
        assert_eq!(coerce_text(Some(&json!(4.0))).as_deref(), Some("4"));
        assert_eq!(coerce_text(Some(&json!(4.5))).as_deref(), Some("4.5"));
        assert_eq!(coerce_text(Some(&json!(true))).as_deref(), Some("true"));
        assert_eq!(coerce_text(Some(&json!(["a"]))).as_deref(), Some(r#"["a"]"#));
    }

    #[test]
    fn drama_coercion_is_total() {
        use serde_json::json;
        let drama = |v: Value| DramaLevel::from_raw(coerce_text(Some(&v)).as_deref());
        assert_eq!(drama(json!(1)), DramaLevel::Plain);
        assert_eq!(drama(json!("2")), DramaLevel::Simple);
        assert_eq!(drama(json!(4.0)), DramaLevel::Dramatic);
        assert_eq!(drama(json!(4.5)), DramaLevel::Balanced);
        assert_eq!(drama(json!(9)), DramaLevel::Balanced);
        assert_eq!(drama(json!(true)), DramaLevel::Balanced);
        assert_eq!(drama(json!(null)), DramaLevel::Balanced);
    }

    // -------------------------------------------------------------------------
    // Storyboard
    // -------------------------------------------------------------------------

    fn stored_story(id: StoryId) -> Story {
        Story {
            id,
            title: "Tale".to_string(),
            content: "Words.".to_string(),
            author: "Ada".to_string(),
            handle: None,
            likes: 0,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn share_without_title_is_bad_request() {
        let (status, body) = send(
            Mocks::default().router(),
            json_request(Method::POST, "/api/stories", serde_json::json!({"content": "x"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({"error": "title is required"}));
    }

    #[tokio::test]
    async fn share_returns_created_story() {
        let mut mocks = Mocks::default();
        mocks.story.expect_insert().times(1).returning(|s| {
            let mut story = stored_story(StoryId::new());
            story.title = s.title().to_string();
            Ok(story)
        });

        let (status, body) = send(
            mocks.router(),
            json_request(
                Method::POST,
                "/api/stories",
                serde_json::json!({"title": "Bastard Sword", "content": "A tale."}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["title"], "B*st*rd Sword");
    }

    #[tokio::test]
    async fn unconfigured_store_is_internal_error_with_message() {
        let mut mocks = Mocks::default();
        mocks
            .story
            .expect_list()
            .returning(|_| Err(RepoError::NotConfigured));

        let request = Request::builder().uri("/api/stories?limit=10").body(Body::empty()).unwrap();
        let (status, body) = send(mocks.router(), request).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("SUPABASE_URL"));
    }

    #[tokio::test]
    async fn invalid_story_id_is_bad_request() {
        let request = Request::builder().uri("/api/stories/nope").body(Body::empty()).unwrap();
        let (status, body) = send(Mocks::default().router(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid story id: nope");
    }

    #[tokio::test]
    async fn missing_story_is_not_found() {
        let mut mocks = Mocks::default();
        mocks.story.expect_get().returning(|_| Ok(None));

        let uri = format!("/api/stories/{}", StoryId::new());
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let (status, body) = send(mocks.router(), request).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Story not found");
    }

    #[tokio::test]
    async fn like_returns_new_count() {
        let story_id = StoryId::new();
        let mut mocks = Mocks::default();
        mocks
            .story
            .expect_get()
            .returning(move |id| Ok(Some(stored_story(id))));
        mocks.reaction.expect_upsert().times(1).returning(|_| Ok(()));
        mocks
            .reaction
            .expect_count_for_story()
            .returning(|_| Ok(12));
        mocks
            .story
            .expect_set_likes()
            .times(1)
            .returning(|_, _| Ok(()));

        let (status, body) = send(
            mocks.router(),
            json_request(
                Method::POST,
                &format!("/api/stories/{story_id}/like"),
                serde_json::json!({"clientId": "browser-1"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({"likes": 12}));
    }

    #[tokio::test]
    async fn comment_without_body_is_bad_request() {
        let (status, body) = send(
            Mocks::default().router(),
            json_request(
                Method::POST,
                &format!("/api/stories/{}/comments", StoryId::new()),
                serde_json::json!({"author": "Ada"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "body is required");
    }

    // -------------------------------------------------------------------------
    // Profiles
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn put_profile_stores_sanitized_nickname() {
        let mut mocks = Mocks::default();
        mocks.profile.expect_upsert().times(1).returning(|u| {
            Ok(Profile {
                client_id: u.client_id.clone(),
                nickname: u.nickname.to_string(),
                updated_at: None,
            })
        });

        let (status, body) = send(
            mocks.router(),
            json_request(
                Method::PUT,
                "/api/profiles/browser-1",
                serde_json::json!({"nickname": "Whore of Babylon"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["nickname"], "Wh*r* of Babylon");
        assert_eq!(body["client_id"], "browser-1");
    }

    #[tokio::test]
    async fn get_profile_round_trips_client_id() {
        let mut mocks = Mocks::default();
        mocks.profile.expect_get().returning(|id| {
            Ok(Some(Profile {
                client_id: id.clone(),
                nickname: "Wanderer".to_string(),
                updated_at: None,
            }))
        });

        let request = Request::builder()
            .uri("/api/profiles/browser-9")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(mocks.router(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["client_id"], ClientId::new("browser-9").unwrap().as_str());
    }
}
