// src/presentation/http/controllers/resolvers.rs
//
// The single query/mutation endpoint. A request names its operation and
// carries that operation's typed arguments; dispatch hands them to the
// matching application service and wraps the result in a `data` envelope.
use crate::application::{
    commands::{
        posts::{CreatePostCommand, DeletePostCommand, UpdatePostCommand},
        users::{LoginUserCommand, RegisterUserCommand, UpdateStatusCommand},
    },
    error::ApplicationError,
    queries::posts::{GetPostQuery, ListPostsQuery},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AuthContext;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostInput {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "operation", rename_all = "camelCase")]
pub enum Operation {
    #[serde(rename_all = "camelCase")]
    CreateUser { user_input: RegisterInput },
    #[serde(rename_all = "camelCase")]
    Login { user_input: LoginInput },
    #[serde(rename_all = "camelCase")]
    CreatePost { post_input: PostInput },
    Posts {
        #[serde(default)]
        page: Option<u32>,
        #[serde(default)]
        limit: Option<u32>,
    },
    #[serde(rename_all = "camelCase")]
    Post { post_id: i64 },
    #[serde(rename_all = "camelCase")]
    UpdatePost { post_id: i64, post_input: PostInput },
    #[serde(rename_all = "camelCase")]
    DeletePost { post_id: i64 },
    User,
    UpdateStatus { status: String },
}

#[derive(Debug, Serialize)]
pub struct DataEnvelope {
    pub data: serde_json::Value,
}

pub async fn execute(
    Extension(state): Extension<HttpState>,
    ctx: AuthContext,
    Json(operation): Json<Operation>,
) -> HttpResult<Json<DataEnvelope>> {
    let actor = ctx.actor();
    let services = &state.services;

    let data = match operation {
        Operation::CreateUser { user_input } => {
            let command = RegisterUserCommand {
                name: user_input.name,
                email: user_input.email,
                password: user_input.password,
            };
            to_value(services.user_commands.register(command).await.into_http()?)?
        }
        Operation::Login { user_input } => {
            let command = LoginUserCommand {
                email: user_input.email,
                password: user_input.password,
            };
            to_value(services.user_commands.login(command).await.into_http()?)?
        }
        Operation::CreatePost { post_input } => {
            let command = CreatePostCommand {
                title: post_input.title,
                content: post_input.content,
                image_url: post_input.image_url.unwrap_or_default(),
            };
            to_value(
                services
                    .post_commands
                    .create_post(actor, command)
                    .await
                    .into_http()?,
            )?
        }
        Operation::Posts { page, limit } => to_value(
            services
                .post_queries
                .list_posts(actor, ListPostsQuery { page, limit })
                .await
                .into_http()?,
        )?,
        Operation::Post { post_id } => to_value(
            services
                .post_queries
                .get_post(actor, GetPostQuery { post_id })
                .await
                .into_http()?,
        )?,
        Operation::UpdatePost {
            post_id,
            post_input,
        } => {
            let command = UpdatePostCommand {
                post_id,
                title: post_input.title,
                content: post_input.content,
                image_url: post_input.image_url,
            };
            to_value(
                services
                    .post_commands
                    .update_post(actor, command)
                    .await
                    .into_http()?,
            )?
        }
        Operation::DeletePost { post_id } => {
            let deleted = services
                .post_commands
                .delete_post(actor, DeletePostCommand { post_id })
                .await
                .into_http()?;
            json!(deleted)
        }
        Operation::User => to_value(services.user_queries.get_self(actor).await.into_http()?)?,
        Operation::UpdateStatus { status } => {
            let command = UpdateStatusCommand { status };
            to_value(
                services
                    .user_commands
                    .update_status(actor, command)
                    .await
                    .into_http()?,
            )?
        }
    };

    Ok(Json(DataEnvelope { data }))
}

fn to_value<T: Serialize>(value: T) -> HttpResult<serde_json::Value> {
    serde_json::to_value(value)
        .map_err(|err| HttpError::from_error(ApplicationError::infrastructure(err.to_string())))
}
