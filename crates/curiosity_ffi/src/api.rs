//! Account-facing API for the Flutter shell.
//!
//! # Responsibility
//! - Expose every store operation as a sync call returning a plain envelope.
//! - Translate core errors into `ok=false` plus a human-readable message.
//!
//! # Invariants
//! - Exported functions never panic across the FFI boundary.
//! - All calls in one process share a single store, so read-modify-write
//!   cycles are serialized per collection.
//! - Ids cross the boundary as hyphenated UUID strings.

use curiosity_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Account, FeedOrder, LocalSocialStore, Post, PrivateNote, SocialConfig, SocialError,
    SqliteStore,
};
use log::error;
use once_cell::sync::OnceCell;
use uuid::Uuid;

static SHARED_STORE: OnceCell<LocalSocialStore<SqliteStore>> = OnceCell::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Core crate version.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core logging once per process.
///
/// Returns an empty string on success and the error message otherwise.
/// Safe to repeat with the same `level + log_dir`.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Outcome of a mutating call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    /// Id of the created or affected record, when there is one.
    pub id: Option<String>,
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, id: Option<String>) -> Self {
        Self {
            ok: true,
            id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// Public account projection. Never carries the password digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountView {
    pub account_id: String,
    pub email: String,
    pub username: String,
    pub initial: String,
    pub joined_at: i64,
}

/// Login/session envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionResponse {
    pub ok: bool,
    pub account: Option<AccountView>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteView {
    pub note_id: String,
    pub content: String,
    pub category: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesResponse {
    pub ok: bool,
    pub items: Vec<NoteView>,
    pub message: String,
}

/// Post projection with the viewer's like state resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostView {
    pub post_id: String,
    pub account_id: String,
    pub username: String,
    pub initial: String,
    pub content: String,
    pub created_at: i64,
    pub likes: u32,
    /// Whether the requesting viewer currently likes this post.
    pub liked_by_viewer: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedResponse {
    pub ok: bool,
    pub items: Vec<PostView>,
    pub message: String,
}

impl FeedResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            items: Vec::new(),
            message: message.into(),
        }
    }
}

/// Registers a new account.
#[flutter_rust_bridge::frb(sync)]
pub fn register(email: String, username: String, password: String) -> ActionResponse {
    let result = with_store(|store| {
        store
            .register(email.trim(), username.trim(), &password)
            .map_err(|err| err.to_string())
    });
    match result {
        Ok(account_id) => {
            ActionResponse::success("Registration successful.", Some(account_id.to_string()))
        }
        Err(err) => ActionResponse::failure(format!("register failed: {err}")),
    }
}

/// Verifies credentials and opens the session.
#[flutter_rust_bridge::frb(sync)]
pub fn login(email: String, password: String) -> SessionResponse {
    match with_store(|store| {
        store
            .login(email.trim(), &password)
            .map_err(|err| err.to_string())
    }) {
        Ok(account) => SessionResponse {
            ok: true,
            account: Some(to_account_view(&account)),
            message: "Login successful.".to_string(),
        },
        Err(err) => SessionResponse {
            ok: false,
            account: None,
            message: format!("login failed: {err}"),
        },
    }
}

/// Clears the session. Idempotent.
#[flutter_rust_bridge::frb(sync)]
pub fn logout() -> ActionResponse {
    match with_store(|store| store.logout().map_err(|err| err.to_string())) {
        Ok(()) => ActionResponse::success("Logged out.", None),
        Err(err) => ActionResponse::failure(format!("logout failed: {err}")),
    }
}

/// Account behind the active session; `ok=true, account=None` when logged out.
#[flutter_rust_bridge::frb(sync)]
pub fn current_account() -> SessionResponse {
    match with_store(|store| store.current_account().map_err(|err| err.to_string())) {
        Ok(account) => SessionResponse {
            ok: true,
            message: if account.is_some() {
                "Logged in.".to_string()
            } else {
                "Logged out.".to_string()
            },
            account: account.as_ref().map(to_account_view),
        },
        Err(err) => SessionResponse {
            ok: false,
            account: None,
            message: format!("current_account failed: {err}"),
        },
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn list_notes(account_id: String) -> NotesResponse {
    let result = parse_id("account_id", &account_id).and_then(|account_id| {
        with_store(|store| store.list_notes(account_id).map_err(|err| err.to_string()))
    });
    match result {
        Ok(notes) => NotesResponse {
            ok: true,
            message: format!("{} note(s).", notes.len()),
            items: notes.iter().map(to_note_view).collect(),
        },
        Err(err) => NotesResponse {
            ok: false,
            items: Vec::new(),
            message: format!("list_notes failed: {err}"),
        },
    }
}

/// Adds a private note; blank or missing `category` means `general`.
#[flutter_rust_bridge::frb(sync)]
pub fn add_note(account_id: String, content: String, category: Option<String>) -> ActionResponse {
    let result = parse_id("account_id", &account_id).and_then(|account_id| {
        with_store(|store| {
            store
                .add_note(account_id, &content, category.as_deref())
                .map_err(|err| err.to_string())
        })
    });
    match result {
        Ok(note) => ActionResponse::success("Note saved.", Some(note.note_id.to_string())),
        Err(err) => ActionResponse::failure(format!("add_note failed: {err}")),
    }
}

/// Deletes a private note. Deleting an absent note still succeeds.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_note(account_id: String, note_id: String) -> ActionResponse {
    let result = parse_id("account_id", &account_id).and_then(|account_id| {
        let note_id = parse_id("note_id", &note_id)?;
        with_store(|store| {
            store
                .delete_note(account_id, note_id)
                .map_err(|err| err.to_string())
        })
    });
    match result {
        Ok(true) => ActionResponse::success("Note deleted.", Some(note_id)),
        Ok(false) => ActionResponse::success("Note already absent.", Some(note_id)),
        Err(err) => ActionResponse::failure(format!("delete_note failed: {err}")),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn create_post(account_id: String, content: String) -> ActionResponse {
    let result = parse_id("account_id", &account_id).and_then(|account_id| {
        with_store(|store| {
            store
                .create_post(account_id, &content)
                .map_err(|err| err.to_string())
        })
    });
    post_action(result, "create_post")
}

/// Publishes `content` and removes the source note when `note_id` is given.
#[flutter_rust_bridge::frb(sync)]
pub fn share_note_as_post(
    account_id: String,
    note_id: Option<String>,
    content: String,
) -> ActionResponse {
    let result = parse_id("account_id", &account_id).and_then(|account_id| {
        let note_id = note_id
            .as_deref()
            .map(|raw| parse_id("note_id", raw))
            .transpose()?;
        with_store(|store| {
            store
                .share_note_as_post(account_id, note_id, &content)
                .map_err(|err| err.to_string())
        })
    });
    post_action(result, "share_note_as_post")
}

/// Likes or unlikes a post. Unknown posts report `ok=false` without writing.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_like(post_id: String, account_id: String) -> ActionResponse {
    let result = parse_id("post_id", &post_id).and_then(|post_id| {
        let account_id = parse_id("account_id", &account_id)?;
        with_store(|store| {
            store
                .toggle_like(post_id, account_id)
                .map_err(|err| err.to_string())?
                .ok_or_else(|| SocialError::UnknownPost(post_id).to_string())
        })
    });
    match result {
        Ok(post) => ActionResponse::success(
            format!("Post has {} like(s).", post.likes),
            Some(post.post_id.to_string()),
        ),
        Err(err) => ActionResponse::failure(format!("toggle_like failed: {err}")),
    }
}

/// Feed view. `filter` is `latest` or `popular`; anything else means latest.
///
/// `viewer_id` resolves `liked_by_viewer`; pass `None` when logged out.
#[flutter_rust_bridge::frb(sync)]
pub fn feed(filter: String, viewer_id: Option<String>) -> FeedResponse {
    let order = FeedOrder::from_filter(&filter);
    feed_response(viewer_id, |store| store.feed(order))
}

/// Posts authored by `account_id`, in feed order.
#[flutter_rust_bridge::frb(sync)]
pub fn posts_by_account(account_id: String, viewer_id: Option<String>) -> FeedResponse {
    match parse_id("account_id", &account_id) {
        Ok(account_id) => feed_response(viewer_id, |store| store.posts_by_account(account_id)),
        Err(err) => FeedResponse::failure(format!("posts_by_account failed: {err}")),
    }
}

fn feed_response(
    viewer_id: Option<String>,
    load: impl FnOnce(&LocalSocialStore<SqliteStore>) -> Result<Vec<Post>, SocialError>,
) -> FeedResponse {
    let viewer = match viewer_id.as_deref().map(|raw| parse_id("viewer_id", raw)) {
        Some(Ok(id)) => Some(id),
        Some(Err(err)) => return FeedResponse::failure(format!("feed failed: {err}")),
        None => None,
    };

    match with_store(|store| load(store).map_err(|err| err.to_string())) {
        Ok(posts) => FeedResponse {
            ok: true,
            message: if posts.is_empty() {
                "No posts yet.".to_string()
            } else {
                format!("{} post(s).", posts.len())
            },
            items: posts
                .iter()
                .map(|post| to_post_view(post, viewer))
                .collect(),
        },
        Err(err) => FeedResponse::failure(format!("feed failed: {err}")),
    }
}

fn post_action(result: Result<Post, String>, operation: &str) -> ActionResponse {
    match result {
        Ok(post) => ActionResponse::success("Post published.", Some(post.post_id.to_string())),
        Err(err) => ActionResponse::failure(format!("{operation} failed: {err}")),
    }
}

fn with_store<T>(
    f: impl FnOnce(&LocalSocialStore<SqliteStore>) -> Result<T, String>,
) -> Result<T, String> {
    let store = SHARED_STORE.get_or_try_init(|| {
        let config = SocialConfig::from_env();
        SqliteStore::open(&config.db_path)
            .map(LocalSocialStore::new)
            .map_err(|err| {
                error!(
                    "event=store_open module=ffi status=error path={} error={}",
                    config.db_path.display(),
                    err
                );
                format!("store open failed: {err}")
            })
    })?;
    f(store)
}

fn parse_id(field: &str, raw: &str) -> Result<Uuid, String> {
    Uuid::parse_str(raw.trim()).map_err(|_| format!("invalid {field}: `{raw}`"))
}

fn to_account_view(account: &Account) -> AccountView {
    AccountView {
        account_id: account.account_id.to_string(),
        email: account.email.clone(),
        username: account.username.clone(),
        initial: account.initial.clone(),
        joined_at: account.joined_at,
    }
}

fn to_note_view(note: &PrivateNote) -> NoteView {
    NoteView {
        note_id: note.note_id.to_string(),
        content: note.content.clone(),
        category: note.category.clone(),
        created_at: note.created_at,
    }
}

fn to_post_view(post: &Post, viewer: Option<Uuid>) -> PostView {
    PostView {
        post_id: post.post_id.to_string(),
        account_id: post.account_id.to_string(),
        username: post.username.clone(),
        initial: post.initial.clone(),
        content: post.content.clone(),
        created_at: post.created_at,
        likes: post.likes,
        liked_by_viewer: viewer.is_some_and(|viewer| post.is_liked_by(viewer)),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        add_note, core_version, create_post, delete_note, feed, init_logging, list_notes, login,
        ping, posts_by_account, register, share_note_as_post, toggle_like,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}{nanos}")
    }

    fn registered(prefix: &str) -> (String, String) {
        let name = unique_token(prefix);
        let email = format!("{name}@example.com");
        let response = register(email.clone(), name, "pw".to_string());
        assert!(response.ok, "{}", response.message);
        (response.id.expect("register should return id"), email)
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_bad_input() {
        assert!(!init_logging("info".to_string(), String::new()).is_empty());
        assert!(!init_logging("verbose".to_string(), "tmp/logs".to_string()).is_empty());
    }

    #[test]
    fn register_and_login_report_envelopes() {
        let (account_id, email) = registered("login");

        let duplicate = register(email.clone(), unique_token("other"), "pw".to_string());
        assert!(!duplicate.ok);
        assert!(duplicate.message.contains("email already registered"));

        let rejected = login(email.clone(), "wrong".to_string());
        assert!(!rejected.ok);
        assert!(rejected.account.is_none());

        let session = login(email, "pw".to_string());
        assert!(session.ok, "{}", session.message);
        assert_eq!(
            session.account.map(|account| account.account_id),
            Some(account_id)
        );
    }

    #[test]
    fn note_lifecycle_and_promotion() {
        let (account_id, _) = registered("notes");

        let note = add_note(account_id.clone(), "hello".to_string(), None);
        assert!(note.ok, "{}", note.message);
        let note_id = note.id.expect("note id");
        let scratch = add_note(
            account_id.clone(),
            "scratch".to_string(),
            Some("draft".into()),
        );
        let scratch_id = scratch.id.expect("scratch id");

        let listed = list_notes(account_id.clone());
        assert_eq!(listed.items.len(), 2);
        assert_eq!(listed.items[0].category, "general");

        assert!(delete_note(account_id.clone(), scratch_id.clone()).ok);
        let again = delete_note(account_id.clone(), scratch_id);
        assert!(again.ok);
        assert!(again.message.contains("already absent"));

        let shared = share_note_as_post(account_id.clone(), Some(note_id), "hello".to_string());
        assert!(shared.ok, "{}", shared.message);
        assert!(list_notes(account_id.clone()).items.is_empty());

        let authored = posts_by_account(account_id, None);
        assert_eq!(authored.items.len(), 1);
        assert_eq!(authored.items[0].content, "hello");
    }

    #[test]
    fn toggle_like_reports_viewer_state() {
        let (author, _) = registered("likes");
        let (viewer, _) = registered("viewer");
        let post_id = create_post(author, "likeable".to_string())
            .id
            .expect("post id");

        let liked = toggle_like(post_id.clone(), viewer.clone());
        assert!(liked.ok, "{}", liked.message);
        assert!(liked.message.contains("1 like"));

        let view = feed("popular".to_string(), Some(viewer.clone()));
        let item = view
            .items
            .iter()
            .find(|item| item.post_id == post_id)
            .expect("post should be in feed");
        assert!(item.liked_by_viewer);

        let unliked = toggle_like(post_id, viewer);
        assert!(unliked.message.contains("0 like"));
    }

    #[test]
    fn unknown_ids_fail_without_panicking() {
        let missing = toggle_like(
            "00000000-0000-4000-8000-000000000000".to_string(),
            "00000000-0000-4000-8000-000000000001".to_string(),
        );
        assert!(!missing.ok);
        assert!(missing.message.contains("post not found"));

        let malformed = create_post("not-a-uuid".to_string(), "x".to_string());
        assert!(!malformed.ok);
        assert!(malformed.message.contains("invalid account_id"));

        let unknown = create_post(
            "00000000-0000-4000-8000-000000000002".to_string(),
            "x".to_string(),
        );
        assert!(!unknown.ok);
        assert!(unknown.message.contains("account not found"));
    }
}
