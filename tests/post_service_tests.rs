// tests/post_service_tests.rs
use std::sync::Arc;

mod support;

use scribe_core::application::commands::posts::{
    CreatePostCommand, DeletePostCommand, PostCommandService, UpdatePostCommand,
};
use scribe_core::application::error::ApplicationError;
use scribe_core::domain::user::{
    DEFAULT_STATUS, DisplayName, Email, PasswordHash, User, UserId,
};

use support::mocks::{
    FixedClock, InMemoryPostRepo, InMemoryUserRepo, RecordingImageStore, authenticated_user,
    fixed_now, hash_for,
};

struct Fixture {
    users: Arc<InMemoryUserRepo>,
    posts: Arc<InMemoryPostRepo>,
    images: Arc<RecordingImageStore>,
    svc: PostCommandService,
}

fn fixture() -> Fixture {
    let users = Arc::new(InMemoryUserRepo::new());
    let posts = Arc::new(InMemoryPostRepo::new());
    let images = Arc::new(RecordingImageStore::new());
    let svc = PostCommandService::new(
        Arc::clone(&posts) as _,
        Arc::clone(&posts) as _,
        Arc::clone(&users) as _,
        Arc::clone(&images) as _,
        Arc::new(FixedClock),
    );
    Fixture {
        users,
        posts,
        images,
        svc,
    }
}

fn seed_user(fx: &Fixture, id: i64, name: &str) {
    let user = User {
        id: UserId::new(id).unwrap(),
        email: Email::new(format!("{name}@example.com")).unwrap(),
        name: DisplayName::new(name).unwrap(),
        password_hash: PasswordHash::new(hash_for("secret")).unwrap(),
        status: DEFAULT_STATUS.into(),
        created_at: fixed_now(),
    };
    fx.users.seed(user);
    fx.posts.register_creator(UserId::new(id).unwrap(), name);
}

async fn seed_post(fx: &Fixture, author: i64, image_url: &str) -> i64 {
    let actor = authenticated_user(author);
    let dto = fx
        .svc
        .create_post(
            Some(&actor),
            CreatePostCommand {
                title: "First post".into(),
                content: "Hello out there".into(),
                image_url: image_url.into(),
            },
        )
        .await
        .expect("seed post should succeed");
    dto.id
}

#[tokio::test]
async fn create_post_requires_authentication() {
    let fx = fixture();

    let err = fx
        .svc
        .create_post(
            None,
            CreatePostCommand {
                title: "Valid title".into(),
                content: "Valid content".into(),
                image_url: String::new(),
            },
        )
        .await
        .expect_err("anonymous caller should be rejected");

    assert!(matches!(err, ApplicationError::Unauthenticated(_)));
    assert_eq!(fx.posts.len(), 0);
}

#[tokio::test]
async fn create_post_reports_every_invalid_field() {
    let fx = fixture();
    seed_user(&fx, 1, "alice");
    let actor = authenticated_user(1);

    let err = fx
        .svc
        .create_post(
            Some(&actor),
            CreatePostCommand {
                title: "hi".into(),
                content: "no".into(),
                image_url: String::new(),
            },
        )
        .await
        .expect_err("short fields should be rejected");

    match err {
        ApplicationError::InvalidInput(errors) => {
            assert_eq!(
                errors,
                vec!["title is invalid".to_string(), "content is invalid".to_string()]
            );
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
    assert_eq!(fx.posts.len(), 0);
}

#[tokio::test]
async fn create_post_with_vanished_account_is_treated_as_invalid_session() {
    let fx = fixture();
    let actor = authenticated_user(42);

    let err = fx
        .svc
        .create_post(
            Some(&actor),
            CreatePostCommand {
                title: "Valid title".into(),
                content: "Valid content".into(),
                image_url: String::new(),
            },
        )
        .await
        .expect_err("token for a deleted account should be rejected");

    assert!(matches!(err, ApplicationError::Unauthenticated(_)));
}

#[tokio::test]
async fn create_post_returns_creator_view() {
    let fx = fixture();
    seed_user(&fx, 1, "alice");
    let actor = authenticated_user(1);

    let dto = fx
        .svc
        .create_post(
            Some(&actor),
            CreatePostCommand {
                title: "First post".into(),
                content: "Hello out there".into(),
                image_url: "images/pic.png".into(),
            },
        )
        .await
        .expect("create should succeed");

    assert_eq!(dto.title, "First post");
    assert_eq!(dto.image_url, "images/pic.png");
    assert_eq!(dto.creator.id, 1);
    assert_eq!(dto.creator.name, "alice");
    assert_eq!(fx.posts.len(), 1);
}

#[tokio::test]
async fn update_post_by_non_owner_is_forbidden_and_leaves_post_unchanged() {
    let fx = fixture();
    seed_user(&fx, 1, "alice");
    seed_user(&fx, 2, "mallory");
    let post_id = seed_post(&fx, 1, "").await;

    let intruder = authenticated_user(2);
    let err = fx
        .svc
        .update_post(
            Some(&intruder),
            UpdatePostCommand {
                post_id,
                title: "Hijacked post".into(),
                content: "Should not land".into(),
                image_url: None,
            },
        )
        .await
        .expect_err("non-owner update should be rejected");

    assert!(matches!(err, ApplicationError::Forbidden(_)));
    assert_eq!(fx.posts.get(post_id).unwrap().title.as_str(), "First post");
}

#[tokio::test]
async fn update_post_checks_ownership_before_validation() {
    let fx = fixture();
    seed_user(&fx, 1, "alice");
    seed_user(&fx, 2, "mallory");
    let post_id = seed_post(&fx, 1, "").await;

    // Invalid fields from the wrong user still surface as Forbidden.
    let intruder = authenticated_user(2);
    let err = fx
        .svc
        .update_post(
            Some(&intruder),
            UpdatePostCommand {
                post_id,
                title: "x".into(),
                content: "y".into(),
                image_url: None,
            },
        )
        .await
        .expect_err("non-owner update should be rejected");

    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn update_post_ignores_undefined_image_placeholder() {
    let fx = fixture();
    seed_user(&fx, 1, "alice");
    let post_id = seed_post(&fx, 1, "images/original.png").await;

    let actor = authenticated_user(1);
    let dto = fx
        .svc
        .update_post(
            Some(&actor),
            UpdatePostCommand {
                post_id,
                title: "Edited title".into(),
                content: "Edited content".into(),
                image_url: Some("undefined".into()),
            },
        )
        .await
        .expect("update should succeed");

    assert_eq!(dto.title, "Edited title");
    assert_eq!(dto.image_url, "images/original.png");
}

#[tokio::test]
async fn update_post_replaces_image_when_a_real_path_is_given() {
    let fx = fixture();
    seed_user(&fx, 1, "alice");
    let post_id = seed_post(&fx, 1, "images/original.png").await;

    let actor = authenticated_user(1);
    let dto = fx
        .svc
        .update_post(
            Some(&actor),
            UpdatePostCommand {
                post_id,
                title: "Edited title".into(),
                content: "Edited content".into(),
                image_url: Some("images/replacement.png".into()),
            },
        )
        .await
        .expect("update should succeed");

    assert_eq!(dto.image_url, "images/replacement.png");
}

#[tokio::test]
async fn delete_post_removes_post_and_its_image() {
    let fx = fixture();
    seed_user(&fx, 1, "alice");
    let post_id = seed_post(&fx, 1, "images/pic.png").await;

    let actor = authenticated_user(1);
    let deleted = fx
        .svc
        .delete_post(Some(&actor), DeletePostCommand { post_id })
        .await
        .expect("delete should succeed");

    assert!(deleted);
    assert_eq!(fx.posts.len(), 0);
    assert_eq!(fx.images.removed_paths(), vec!["images/pic.png".to_string()]);
}

#[tokio::test]
async fn delete_post_succeeds_even_when_image_removal_fails() {
    let fx = fixture();
    seed_user(&fx, 1, "alice");
    let post_id = seed_post(&fx, 1, "images/pic.png").await;
    fx.images.fail_remove(true);

    let actor = authenticated_user(1);
    let deleted = fx
        .svc
        .delete_post(Some(&actor), DeletePostCommand { post_id })
        .await
        .expect("delete should stay best effort");

    assert!(deleted);
    assert_eq!(fx.posts.len(), 0);
}

#[tokio::test]
async fn delete_post_by_non_owner_is_forbidden() {
    let fx = fixture();
    seed_user(&fx, 1, "alice");
    seed_user(&fx, 2, "mallory");
    let post_id = seed_post(&fx, 1, "").await;

    let intruder = authenticated_user(2);
    let err = fx
        .svc
        .delete_post(Some(&intruder), DeletePostCommand { post_id })
        .await
        .expect_err("non-owner delete should be rejected");

    assert!(matches!(err, ApplicationError::Forbidden(_)));
    assert_eq!(fx.posts.len(), 1);
}

#[tokio::test]
async fn delete_missing_post_is_not_found() {
    let fx = fixture();
    seed_user(&fx, 1, "alice");

    let actor = authenticated_user(1);
    let err = fx
        .svc
        .delete_post(Some(&actor), DeletePostCommand { post_id: 99 })
        .await
        .expect_err("missing post should be rejected");

    assert!(matches!(err, ApplicationError::NotFound(_)));
}
