use crate::{
    application::{
        admin::use_case::AdminConsole,
        feed::use_case::{FeedSource, PostFeed},
        post_detail::use_case::PostDetail,
        profile::use_case::ProfilePage,
        reaction_toggle::use_case::ReactionFactory,
        session::use_case::SessionUseCase,
    },
    config::Config,
    domain::{
        shared::{errors::DomainError, ids::EntityId},
        user::entity::SessionContext,
    },
    infrastructure::{
        http::client::BackendClient,
        notify::snackbar::SnackbarNotifier,
        repositories::{
            http_admin_repository::HttpAdminRepository,
            http_comment_repository::HttpCommentRepository,
            http_post_repository::HttpPostRepository,
            http_profile_repository::HttpProfileRepository,
            http_reaction_service::HttpReactionService,
            http_session_repository::HttpSessionRepository,
        },
    },
};
use std::sync::Arc;

/// Shared collaborators for every view, all talking to one backend through
/// the same cookie-carrying client.
#[derive(Clone)]
pub struct ClientState {
    pub config: Config,
    pub client: BackendClient,
    pub notifier: Arc<SnackbarNotifier>,
    pub post_repo: Arc<HttpPostRepository>,
    pub comment_repo: Arc<HttpCommentRepository>,
    pub profile_repo: Arc<HttpProfileRepository>,
    pub session_repo: Arc<HttpSessionRepository>,
    pub admin_repo: Arc<HttpAdminRepository>,
    pub reaction_service: Arc<HttpReactionService>,
}

impl ClientState {
    pub fn new(config: Config) -> Result<Self, DomainError> {
        let client = BackendClient::new(
            &config.backend_url,
            config.request_timeout(),
            &config.user_agent,
        )?;
        Ok(Self {
            notifier: Arc::new(SnackbarNotifier::new(config.notification_auto_hide())),
            post_repo: Arc::new(HttpPostRepository::new(client.clone())),
            comment_repo: Arc::new(HttpCommentRepository::new(client.clone())),
            profile_repo: Arc::new(HttpProfileRepository::new(client.clone())),
            session_repo: Arc::new(HttpSessionRepository::new(client.clone())),
            admin_repo: Arc::new(HttpAdminRepository::new(client.clone())),
            reaction_service: Arc::new(HttpReactionService::new(client.clone())),
            client,
            config,
        })
    }

    pub fn reactions(&self) -> ReactionFactory {
        ReactionFactory {
            service: self.reaction_service.clone(),
            notifier: self.notifier.clone(),
            request_timeout: self.config.request_timeout(),
        }
    }

    pub fn session(&self) -> SessionUseCase {
        SessionUseCase::new(self.session_repo.clone(), self.notifier.clone())
    }

    pub fn feed(&self, session: SessionContext, source: FeedSource) -> PostFeed {
        PostFeed::new(
            self.post_repo.clone(),
            self.profile_repo.clone(),
            self.reactions(),
            session,
            source,
        )
    }

    pub fn post_detail(&self, session: SessionContext, post_id: EntityId) -> PostDetail {
        PostDetail::new(
            self.post_repo.clone(),
            self.comment_repo.clone(),
            self.reactions(),
            session,
            post_id,
        )
    }

    pub fn profile(&self, session: SessionContext, username: &str) -> ProfilePage {
        ProfilePage::new(
            self.profile_repo.clone(),
            self.post_repo.clone(),
            self.reactions(),
            session,
            username,
        )
    }

    pub fn admin(&self, session: &SessionContext) -> Result<AdminConsole, DomainError> {
        AdminConsole::open(self.admin_repo.clone(), self.notifier.clone(), session)
    }
}
