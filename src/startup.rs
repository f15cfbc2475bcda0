//! Application Startup
//!
//! Builds the object graph once per process: storage, HTTP client,
//! translator, session provider and the page services. Pages receive the
//! resulting [`AppContext`] explicitly; nothing here is global.

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use crate::application::services::{
    CartService, CartServiceImpl, CatalogService, CatalogServiceImpl, ChatService,
    ChatServiceImpl, MembershipService, MembershipServiceImpl, Navigator, OrderService,
    OrderServiceImpl, SessionProvider, SessionStatus, WantedService, WantedServiceImpl,
    WishlistService, WishlistServiceImpl,
};
use crate::config::Settings;
use crate::domain::Route;
use crate::i18n::Translator;
use crate::infrastructure::http::ApiClient;
use crate::infrastructure::storage::{FileStore, KeyValueStore};
use crate::presentation::cli::{self, Command};
use crate::presentation::guard::RouteGuard;
use crate::presentation::navigator::HistoryNavigator;
use crate::presentation::scope::PageScope;
use crate::shared::error::AppError;

/// Shared state handed to every page
pub struct AppContext {
    pub settings: Arc<Settings>,
    pub store: Arc<dyn KeyValueStore>,
    pub i18n: Arc<Translator>,
    pub navigator: Arc<HistoryNavigator>,
    pub session: Arc<SessionProvider<ApiClient>>,
    pub catalog: Arc<dyn CatalogService>,
    pub cart: Arc<dyn CartService>,
    pub wishlist: Arc<dyn WishlistService>,
    pub orders: Arc<dyn OrderService>,
    pub chat: Arc<dyn ChatService>,
    pub membership: Arc<dyn MembershipService>,
    pub wanted: Arc<dyn WantedService>,
}

impl AppContext {
    /// Wire everything on top of `store`.
    pub fn new(settings: Settings, store: Arc<dyn KeyValueStore>) -> Result<Self, AppError> {
        let api = Arc::new(ApiClient::new(&settings.api, store.clone())?);
        let i18n = Arc::new(Translator::load(store.clone(), settings.default_language()));
        let navigator = Arc::new(HistoryNavigator::new(Route::Home));
        let session = Arc::new(SessionProvider::new(
            api.clone(),
            store.clone(),
            navigator.clone(),
        ));

        Ok(Self {
            catalog: Arc::new(CatalogServiceImpl::new(api.clone(), api.clone())),
            cart: Arc::new(CartServiceImpl::new(api.clone())),
            wishlist: Arc::new(WishlistServiceImpl::new(api.clone())),
            orders: Arc::new(OrderServiceImpl::new(api.clone())),
            chat: Arc::new(ChatServiceImpl::new(api.clone())),
            membership: Arc::new(MembershipServiceImpl::new(api.clone())),
            wanted: Arc::new(WantedServiceImpl::new(api)),
            settings: Arc::new(settings),
            store,
            i18n,
            navigator,
            session,
        })
    }

    /// Wire everything on the configured storage file.
    pub fn open(settings: Settings) -> Result<Self, AppError> {
        let store = Arc::new(FileStore::open(&settings.storage.path)?);
        Self::new(settings, store)
    }

    /// Enter `route`: navigate and open a scope for its requests.
    pub fn enter(&self, route: Route) -> PageScope {
        if self.navigator.current() != route {
            self.navigator.navigate(route.clone());
        }
        PageScope::new(route)
    }

    /// A fresh guard for one guarded page.
    pub fn guard(&self) -> RouteGuard {
        RouteGuard::new(self.navigator.clone())
    }

    /// Translate with the active language.
    pub fn t(&self, key: &str, fallback: &str) -> String {
        self.i18n.t(key, Some(fallback))
    }
}

/// Application instance
pub struct Application {
    context: Arc<AppContext>,
}

impl Application {
    /// Build the context and resolve the stored session.
    pub async fn build(settings: Settings) -> Result<Self> {
        let context = AppContext::open(settings)?;
        info!(
            api = %context.settings.api.base_url,
            storage = %context.settings.storage.path.display(),
            lang = %context.i18n.lang(),
            "Client ready"
        );

        Ok(Self::from_context(context).await)
    }

    /// Use an already wired context.
    pub async fn from_context(context: AppContext) -> Self {
        let status = context.session.initialize().await;
        if let SessionStatus::Authenticated(user) = &status {
            info!(username = %user.username, "Session restored");
        }

        Self {
            context: Arc::new(context),
        }
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    /// Run one command and return what the page rendered.
    ///
    /// Failures come back as the localized text the page would show.
    pub async fn run(&self, command: Command) -> Result<String> {
        let (key, fallback) = command.failure_text();
        cli::dispatch(&self.context, command).await.map_err(|e| {
            debug!(error = %e, "Command failed");
            anyhow::anyhow!(cli::pages::describe_failure(&self.context, &e, key, fallback))
        })
    }
}
