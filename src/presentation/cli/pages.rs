//! Page renderers.
//!
//! Every page enters its route, runs requests through the page scope and
//! writes plain text into `out`. Guarded pages stop with a login prompt when
//! the visitor is anonymous.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};
use validator::Validate;

use crate::application::dto::{
    LoginForm, MembershipForm, MessageForm, OrderForm, PersonalOverview, ProfileForm,
    RegisterForm, WantedForm,
};
use crate::application::services::{
    AuthError, ChatPoller, ChatSnapshot, Navigator, RegisterOutcome,
};
use crate::domain::{
    Cart, ChatMessage, Item, Language, Order, Price, Route, SearchQuery, User, WantedItem,
    Wishlist,
};
use crate::presentation::guard::GuardDecision;
use crate::presentation::wizard::{ItemDraft, PostWizard, WizardError};
use crate::shared::error::AppError;
use crate::shared::validation::{localized_errors, FieldErrors};
use crate::startup::AppContext;

use super::{CartAction, ItemArgs};

/// Server keys whose messages belong under the confirmation field.
const CONFIRM_FIELD_KEYS: [&str; 2] = ["confirm_password", "non_field_errors"];

pub enum OrderCommand {
    Create(OrderForm),
    Cancel(i64),
}

pub enum LanguageChange {
    Show,
    To(Language),
    Cycle,
}

// =============================================================================
// Formatting
// =============================================================================

fn line(out: &mut String, text: impl AsRef<str>) {
    out.push_str(text.as_ref());
    out.push('\n');
}

fn heading(out: &mut String, title: String) {
    if !out.is_empty() {
        out.push('\n');
    }
    line(out, format!("== {} ==", title));
}

fn money(ctx: &AppContext, price: Price) -> String {
    format!("{} {}", price, ctx.t("item.priceSymbol", "THB"))
}

fn date(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".into())
}

fn price_label(ctx: &AppContext, item: &Item) -> String {
    if item.is_barter {
        return ctx.t("item.barter", "Barter");
    }
    match item.price {
        Some(price) => money(ctx, price),
        None => ctx.t("item.negotiable", "Negotiable"),
    }
}

fn item_row(ctx: &AppContext, item: &Item) -> String {
    let mut row = format!("#{:<5} {}  {}", item.id, item.title, price_label(ctx, item));
    if item.is_featured {
        row.push_str(&format!("  [{}]", ctx.t("item.featured", "Featured")));
    }
    if item.allow_barter && !item.is_barter {
        row.push_str(&format!("  [{}]", ctx.t("barter.acceptsBarter", "Accepts Barter")));
    }
    if !item.is_available {
        row.push_str(&format!("  [{}]", ctx.t("item.soldOut", "Sold Out")));
    }
    row
}

fn item_list(ctx: &AppContext, out: &mut String, items: &[Item], empty_key: &str, empty: &str) {
    if items.is_empty() {
        line(out, ctx.t(empty_key, empty));
        return;
    }
    for item in items {
        line(out, item_row(ctx, item));
    }
}

fn field_list(out: &mut String, errors: &FieldErrors) {
    for (field, message) in errors {
        line(out, format!("  {}: {}", field, message));
    }
}

/// Text for a failed command. Form errors list every field.
pub fn describe_failure(ctx: &AppContext, error: &AppError, key: &str, fallback: &str) -> String {
    match error {
        AppError::Validation(errors) if errors.len() > 1 => {
            let mut out = String::new();
            field_list(&mut out, errors);
            out.trim_end().to_string()
        }
        other => other.user_message(&ctx.i18n, key, fallback),
    }
}

fn auth_failure(error: AuthError) -> AppError {
    match error {
        AuthError::Transport(msg) => AppError::Network(msg),
        AuthError::Storage(msg) => AppError::Storage(msg),
        AuthError::Rejected(msg) => AppError::InvalidInput(msg),
        AuthError::SessionInvalid(msg) => AppError::Unauthorized(msg),
    }
}

fn wizard_failure(ctx: &AppContext, error: WizardError) -> AppError {
    AppError::InvalidInput(ctx.t(error.i18n_key(), &error.to_string()))
}

/// Resolve the session for a guarded page.
async fn require_user(ctx: &AppContext, out: &mut String) -> Option<User> {
    let mut status = ctx.session.subscribe();
    match ctx.guard().resolve(&mut status).await {
        GuardDecision::Render(user) => Some(user),
        GuardDecision::Redirect(route) => {
            line(out, ctx.t("auth.login.required", "Please log in to continue"));
            line(out, format!("-> {}", route.path()));
            None
        }
        GuardDecision::Loading => None,
    }
}

// =============================================================================
// Catalogue
// =============================================================================

pub async fn home(ctx: &AppContext, out: &mut String) -> Result<(), AppError> {
    let scope = ctx.enter(Route::Home);
    let authenticated = ctx.session.is_authenticated();
    let feed = scope.run(ctx.catalog.home(authenticated)).await?;

    heading(out, ctx.t("home.featured.title", "Featured Items"));
    item_list(ctx, out, &feed.featured, "home.featured.noItems", "No featured items yet");

    heading(out, ctx.t("home.barter.title", "Barter"));
    item_list(ctx, out, &feed.barter, "home.barter.noItems", "No barter items yet");

    heading(out, ctx.t("home.latest.title", "Latest Items"));
    item_list(ctx, out, &feed.latest, "home.latest.noProducts", "No items available yet");

    if authenticated {
        heading(out, ctx.t("home.membership.title", "Membership Benefits"));
        match feed.membership.filter(|m| m.is_active && m.is_valid) {
            Some(membership) => {
                line(out, ctx.t("home.membership.active", "Your membership is active!"));
                line(
                    out,
                    format!(
                        "{} {}",
                        ctx.t("home.membership.validUntil", "Valid until:"),
                        date(membership.end_date)
                    ),
                );
            }
            None => {
                line(out, ctx.t("home.membership.unlock", "Unlock exclusive features with membership!"));
                line(out, ctx.t("home.membership.getStarted", "Get Started - 199 THB/month"));
            }
        }
    }

    Ok(())
}

pub async fn featured(ctx: &AppContext, out: &mut String) -> Result<(), AppError> {
    let scope = ctx.enter(Route::Featured);
    let items = scope.run(ctx.catalog.featured()).await?;

    heading(out, ctx.t("featured.title", "Featured Items"));
    line(out, ctx.t("featured.subtitle", "High-quality featured items from members"));
    if items.is_empty() {
        line(out, ctx.t("featured.noItems", "No featured items yet"));
        line(out, ctx.t("featured.noItemsDesc", "Become a member to feature your items here"));
    } else {
        item_list(ctx, out, &items, "featured.noItems", "No featured items yet");
    }
    Ok(())
}

pub async fn barter(ctx: &AppContext, out: &mut String) -> Result<(), AppError> {
    let scope = ctx.enter(Route::Barter);
    let items = scope.run(ctx.catalog.barter()).await?;

    heading(out, ctx.t("barter.title", "Barter"));
    line(out, ctx.t("barter.subtitle", "No cash needed, swap what you have for what you need"));
    if items.is_empty() {
        line(out, ctx.t("barter.noItems", "No barter items yet"));
    }
    for item in &items {
        line(out, item_row(ctx, item));
        if let Some(desired) = item.desired_item.as_deref().filter(|d| !d.is_empty()) {
            line(out, format!("       {} {}", ctx.t("barter.wantToSwap", "Want to swap:"), desired));
        }
    }
    Ok(())
}

pub async fn item(ctx: &AppContext, out: &mut String, args: &ItemArgs) -> Result<(), AppError> {
    let scope = ctx.enter(Route::Item(args.id));
    let item = scope.run(ctx.catalog.item(args.id)).await?;

    heading(out, item.title.clone());
    line(out, price_label(ctx, &item));
    let details = [
        ("item.category", "Category", item.category.clone()),
        ("item.condition", "Condition", ctx.t(item.condition.i18n_key(), item.condition.as_str())),
        ("item.location", "Location", item.location.clone()),
        ("item.contact", "Contact", item.contact_phone.clone()),
        ("item.seller", "Seller", item.owner_username.clone().unwrap_or_default()),
    ];
    for (key, fallback, value) in details {
        if !value.is_empty() {
            line(out, format!("{}: {}", ctx.t(key, fallback), value));
        }
    }
    if let Some(desired) = item.desired_item.as_deref().filter(|d| !d.is_empty()) {
        line(out, format!("{}: {}", ctx.t("item.desiredItem", "Wants in exchange"), desired));
    }
    if !item.description.is_empty() {
        line(out, "");
        line(out, &item.description);
    }
    if let Some(image) = item.primary_image() {
        let shown = if image.starts_with("data:") { "[embedded image]" } else { image };
        line(out, format!("{}: {}", ctx.t("post.form.image", "Images"), shown));
    }

    if !(args.add_to_cart || args.wishlist || args.feature || args.unfeature) {
        return Ok(());
    }

    line(out, "");
    let Some(user) = require_user(ctx, out).await else {
        return Ok(());
    };

    if args.add_to_cart {
        let cart = scope.run(ctx.cart.add_item(item.id)).await?;
        line(out, format!("{} ({} {})", ctx.t("cart.added", "Added to cart"), cart.total_items, ctx.t("cart.pieces", "pieces")));
    }
    if args.wishlist {
        scope.run(ctx.wishlist.add_item(item.id, args.notes.clone())).await?;
        line(out, ctx.t("wishlist.added", "Added to wishlist"));
    }
    if args.feature || args.unfeature {
        if !item.is_owned_by(user.id) {
            return Err(AppError::InvalidInput(
                ctx.t("item.featureFail", "Could not change the featured flag"),
            ));
        }
        let message = if args.feature {
            scope.run(ctx.catalog.set_featured(item.id)).await?
        } else {
            scope.run(ctx.catalog.unset_featured(item.id)).await?
        };
        line(out, message);
    }
    Ok(())
}

pub async fn search(ctx: &AppContext, out: &mut String, query: &SearchQuery) -> Result<(), AppError> {
    let q = Some(query.q.clone()).filter(|q| !q.is_empty());
    let scope = ctx.enter(Route::Search(q));
    let items = scope.run(ctx.catalog.search(query)).await?;

    heading(out, ctx.t("search.title", "Search"));
    if !items.is_empty() {
        line(out, format!("{}: {}", ctx.t("search.results", "Results"), items.len()));
    }
    item_list(ctx, out, &items, "search.noResults", "No results found");
    Ok(())
}

pub async fn post_item(
    ctx: &AppContext,
    out: &mut String,
    draft: ItemDraft,
    images: &[PathBuf],
) -> Result<(), AppError> {
    let scope = ctx.enter(Route::NewItem);
    if require_user(ctx, out).await.is_none() {
        return Ok(());
    }

    let mut wizard = PostWizard::new(ctx.settings.media.clone());
    *wizard.draft_mut() = draft;

    heading(out, ctx.t("post.title", "Post an Item"));
    line(out, format!("{}. {}", wizard.step().number(), ctx.t(wizard.step().i18n_key(), "Basic Info")));
    let step = wizard.next().map_err(|e| wizard_failure(ctx, e))?;

    line(out, format!("{}. {}", step.number(), ctx.t(step.i18n_key(), "Details")));
    for path in images {
        let image = wizard.attach(path).map_err(|e| wizard_failure(ctx, e))?;
        line(out, format!("  + {} ({} bytes)", image.name, image.size));
    }
    let step = wizard.next().map_err(|e| wizard_failure(ctx, e))?;

    line(out, format!("{}. {}", step.number(), ctx.t(step.i18n_key(), "Confirm")));
    let new_item = wizard.build().map_err(|e| wizard_failure(ctx, e))?;
    let created = scope.run(ctx.catalog.post_item(&new_item)).await?;
    wizard.reset();

    line(out, ctx.t("post.success", "Posted successfully! Your item is now listed"));
    line(out, item_row(ctx, &created));
    Ok(())
}

// =============================================================================
// Cart, wishlist, orders
// =============================================================================

fn render_cart(ctx: &AppContext, out: &mut String, cart: &Cart) {
    heading(out, ctx.t("cart.title", "Shopping Cart"));
    if cart.is_empty() {
        line(out, ctx.t("cart.empty", "Cart is empty"));
        line(out, ctx.t("cart.emptyDesc", "Add items to your cart first"));
        return;
    }
    for cart_line in &cart.items {
        line(
            out,
            format!(
                "#{:<5} {}  x{}  {}",
                cart_line.item.id,
                cart_line.item.title,
                cart_line.quantity,
                money(ctx, cart_line.line_total())
            ),
        );
    }
    line(
        out,
        format!(
            "{}: {} {}   {}: {}",
            ctx.t("cart.items", "Items"),
            cart.total_items,
            ctx.t("cart.pieces", "pieces"),
            ctx.t("cart.total", "Total"),
            money(ctx, cart.total_price)
        ),
    );
}

pub async fn cart(ctx: &AppContext, out: &mut String, action: Option<CartAction>) -> Result<(), AppError> {
    let scope = ctx.enter(Route::Cart);
    if require_user(ctx, out).await.is_none() {
        return Ok(());
    }

    let cart = match action {
        None => scope.run(ctx.cart.cart()).await?,
        Some(CartAction::Update { item, quantity }) => {
            match scope.run(ctx.cart.update_quantity(item, quantity)).await? {
                Some(cart) => {
                    line(out, ctx.t("cart.updated", "Cart updated"));
                    cart
                }
                None => scope.run(ctx.cart.cart()).await?,
            }
        }
        Some(CartAction::Remove { item }) => {
            let cart = scope.run(ctx.cart.remove_item(item)).await?;
            line(out, ctx.t("cart.removed", "Removed from cart"));
            cart
        }
        Some(CartAction::Clear) => {
            let cart = scope.run(ctx.cart.clear()).await?;
            line(out, ctx.t("cart.cleared", "Cart cleared"));
            cart
        }
        Some(CartAction::Checkout) => {
            let cart = scope.run(ctx.cart.cart()).await?;
            if cart.is_empty() {
                return Err(AppError::InvalidInput(ctx.t("cart.empty", "Cart is empty")));
            }
            render_cart(ctx, out, &cart);
            ctx.navigator.navigate(Route::NewOrder);
            line(out, "");
            line(out, format!("{} -> {}", ctx.t("cart.checkout", "Checkout"), Route::NewOrder.path()));
            for cart_line in &cart.items {
                line(
                    out,
                    format!(
                        "  orders create --item {} --quantity {} --address <{}>",
                        cart_line.item.id,
                        cart_line.quantity,
                        ctx.t("orders.address", "Shipping Address")
                    ),
                );
            }
            return Ok(());
        }
    };

    render_cart(ctx, out, &cart);
    Ok(())
}

fn render_wishlist(ctx: &AppContext, out: &mut String, wishlist: &Wishlist) {
    heading(out, ctx.t("wishlist.title", "Wishlist"));
    if wishlist.items.is_empty() {
        line(out, ctx.t("wishlist.empty", "No favorites yet"));
        line(out, ctx.t("wishlist.emptyDesc", "Add items you like to your wishlist"));
        return;
    }
    for entry in &wishlist.items {
        line(out, item_row(ctx, &entry.item));
        if let Some(notes) = entry.notes.as_deref().filter(|n| !n.is_empty()) {
            line(out, format!("       {}: {}", ctx.t("wishlist.notes", "Notes"), notes));
        }
    }
}

pub async fn wishlist(ctx: &AppContext, out: &mut String, remove: Option<i64>) -> Result<(), AppError> {
    let scope = ctx.enter(Route::Wishlist);
    if require_user(ctx, out).await.is_none() {
        return Ok(());
    }

    let wishlist = match remove {
        Some(item_id) => {
            let wishlist = scope.run(ctx.wishlist.remove_item(item_id)).await?;
            line(out, ctx.t("wishlist.removed", "Removed from wishlist"));
            wishlist
        }
        None => scope.run(ctx.wishlist.wishlist()).await?,
    };

    render_wishlist(ctx, out, &wishlist);
    Ok(())
}

fn order_row(ctx: &AppContext, order: &Order) -> String {
    let title = order
        .title()
        .map(str::to_string)
        .or_else(|| order.item.map(|id| format!("#{}", id)))
        .unwrap_or_default();
    let payment = if order.is_paid() {
        ctx.t("orders.paid", "Paid")
    } else {
        ctx.t("orders.unpaid", "Unpaid")
    };
    format!(
        "[{}] {}  x{}  {}  {}  {}  {}",
        order.id,
        title,
        order.quantity,
        money(ctx, order.total_price),
        ctx.t(order.status.i18n_key(), order.status.as_str()),
        payment,
        date(order.created_at)
    )
}

pub async fn orders(
    ctx: &AppContext,
    out: &mut String,
    action: Option<OrderCommand>,
) -> Result<(), AppError> {
    let route = match action {
        Some(OrderCommand::Create(_)) => Route::NewOrder,
        _ => Route::Orders,
    };
    let scope = ctx.enter(route);
    if require_user(ctx, out).await.is_none() {
        return Ok(());
    }

    match action {
        Some(OrderCommand::Create(form)) => {
            let order = scope.run(ctx.orders.create(&form)).await?;
            line(out, ctx.t("orders.created", "Order placed"));
            line(out, order_row(ctx, &order));
            ctx.navigator.navigate(Route::Orders);
            return Ok(());
        }
        Some(OrderCommand::Cancel(id)) => {
            let orders = scope.run(ctx.orders.orders()).await?;
            let order = orders
                .iter()
                .find(|o| o.id == id)
                .ok_or_else(|| AppError::NotFound(format!("Order {}", id)))?;
            if !order.status.is_cancellable() {
                return Err(AppError::InvalidInput(
                    ctx.t("orders.notCancellable", "This order can no longer be cancelled"),
                ));
            }
            scope.run(ctx.orders.cancel(order)).await?;
            line(out, ctx.t("orders.cancelled", "Order cancelled"));
        }
        None => {}
    }

    let orders = scope.run(ctx.orders.orders()).await?;
    heading(out, ctx.t("orders.title", "My Orders"));
    if orders.is_empty() {
        line(out, ctx.t("orders.empty", "No orders yet"));
        line(out, ctx.t("orders.emptyDesc", "Start shopping now!"));
    }
    for order in &orders {
        line(out, order_row(ctx, order));
        if !order.shipping_address.is_empty() {
            line(out, format!("       {}: {}", ctx.t("orders.address", "Shipping Address"), order.shipping_address));
        }
    }
    Ok(())
}

// =============================================================================
// Chat
// =============================================================================

fn render_messages(ctx: &AppContext, out: &mut String, me: &User, messages: &[ChatMessage]) {
    if messages.is_empty() {
        line(out, ctx.t("chat.empty", "No messages yet"));
        return;
    }
    for message in messages {
        let direction = if message.sender == Some(me.id) {
            format!("-> {}", message.receiver_username)
        } else {
            format!("<- {}", message.sender_username)
        };
        let about = message.item.map(|id| format!(" (#{})", id)).unwrap_or_default();
        line(out, format!("{} {}{}: {}", date(message.created_at), direction, about, message.text));
    }
}

fn render_snapshot(ctx: &AppContext, out: &mut String, me: &User, snapshot: &ChatSnapshot) {
    line(out, format!("-- {} #{} --", ctx.t("chat.title", "Chat"), snapshot.polls));
    match &snapshot.error {
        Some(error) => line(out, format!("{}: {}", ctx.t("chat.failed", "Failed"), error)),
        None => render_messages(ctx, out, me, &snapshot.messages),
    }
}

pub async fn chat(
    ctx: &AppContext,
    out: &mut String,
    send: Option<MessageForm>,
    watch_secs: Option<u64>,
) -> Result<(), AppError> {
    let scope = ctx.enter(Route::Chat);
    let Some(me) = require_user(ctx, out).await else {
        return Ok(());
    };

    heading(out, ctx.t("chat.title", "Chat"));
    if let Some(form) = send {
        scope.run(ctx.chat.send(&form)).await?;
        line(out, ctx.t("chat.sent", "Sent"));
    }

    let Some(secs) = watch_secs else {
        let messages = scope.run(ctx.chat.messages()).await?;
        render_messages(ctx, out, &me, &messages);
        return Ok(());
    };

    let poller = ChatPoller::start(ctx.chat.clone(), ctx.settings.chat.poll_interval());
    let mut updates = poller.subscribe();
    let page_closed = scope.child_token();
    let deadline = tokio::time::sleep(Duration::from_secs(secs));
    tokio::pin!(deadline);

    loop {
        tokio::select! {
            _ = &mut deadline => break,
            _ = page_closed.cancelled() => break,
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = updates.borrow_and_update().clone();
                render_snapshot(ctx, out, &me, &snapshot);
            }
        }
    }

    debug!(polls = poller.latest().polls, "Chat watch finished");
    poller.shutdown().await;
    Ok(())
}

// =============================================================================
// Wanted
// =============================================================================

fn wanted_row(ctx: &AppContext, wanted: &WantedItem) -> String {
    let budget = wanted
        .max_price
        .map(|p| format!("  {} {}", ctx.t("wanted.maxPrice", "Max Price"), money(ctx, p)))
        .unwrap_or_default();
    let condition = ctx.t(
        wanted.condition_preference.i18n_key(),
        wanted.condition_preference.as_str(),
    );
    format!(
        "[{}] {}{}  {}  {}",
        wanted.id, wanted.title, budget, condition, wanted.user_username
    )
}

pub async fn wanted(ctx: &AppContext, out: &mut String, mine: bool) -> Result<(), AppError> {
    let scope = ctx.enter(Route::Wanted);
    if mine && require_user(ctx, out).await.is_none() {
        return Ok(());
    }

    let items = scope.run(ctx.wanted.list(mine)).await?;
    heading(out, ctx.t("wanted.title", "Wanted Items"));
    line(out, ctx.t("wanted.subtitle", "Post what you need and let sellers contact you"));
    if items.is_empty() {
        line(out, ctx.t("wanted.noItems", "No wanted items yet"));
        line(out, ctx.t("wanted.noItemsDesc", "Post your wanted items and let sellers contact you"));
    }
    for wanted in &items {
        line(out, wanted_row(ctx, wanted));
        if !wanted.location.is_empty() {
            line(out, format!("       {}: {}", ctx.t("wanted.location", "Location"), wanted.location));
        }
    }
    Ok(())
}

pub async fn new_wanted(ctx: &AppContext, out: &mut String, form: &WantedForm) -> Result<(), AppError> {
    let scope = ctx.enter(Route::NewWanted);
    if require_user(ctx, out).await.is_none() {
        return Ok(());
    }

    heading(out, ctx.t("wanted.postWanted", "Post Wanted"));
    let quota = match scope.run(ctx.wanted.quota()).await {
        Ok(quota) => Some(quota),
        Err(AppError::Cancelled) => return Err(AppError::Cancelled),
        Err(e) => {
            warn!(error = %e, "Could not load wanted quota");
            None
        }
    };

    if let Some(quota) = &quota {
        let info = &quota.info;
        line(
            out,
            format!(
                "{}: {}   {}: {}",
                ctx.t("wanted.freePostsUsed", "Free posts used"),
                info.free_posts_used,
                ctx.t("wanted.freePostsRemaining", "Free posts remaining"),
                info.free_posts_remaining
            ),
        );
        if quota.payment_required {
            line(
                out,
                format!(
                    "{}: {}",
                    ctx.t("wanted.paymentRequired", "Payment Required"),
                    money(ctx, info.posting_fee)
                ),
            );
        } else {
            line(out, ctx.t("wanted.freePostAvailable", "Free post available"));
        }
    }

    let info = quota.as_ref().map(|q| &q.info);
    let posted = scope.run(ctx.wanted.post(form, info)).await?;

    line(out, ctx.t("wanted.postSuccess", "Posted successfully!"));
    line(out, wanted_row(ctx, &posted.wanted));
    if posted.payment_due {
        line(
            out,
            ctx.t(
                "wanted.paymentNote",
                "Online payment is not supported. Please pay the posting fee by other means after posting, or contact an administrator.",
            ),
        );
    }
    ctx.navigator.navigate(Route::Wanted);
    Ok(())
}

// =============================================================================
// Personal
// =============================================================================

async fn load_overview(ctx: &AppContext, user: User) -> Result<PersonalOverview, AppError> {
    let (items, membership, orders, wishlist) = tokio::join!(
        ctx.catalog.my_items(),
        ctx.membership.status(),
        ctx.orders.orders(),
        ctx.wishlist.wishlist(),
    );

    Ok(PersonalOverview {
        user,
        items: items?,
        membership: membership.unwrap_or_else(|e| {
            debug!(error = %e, "Membership status unavailable");
            Default::default()
        }),
        orders: orders.unwrap_or_else(|e| {
            debug!(error = %e, "Orders unavailable");
            Vec::new()
        }),
        wishlist: wishlist.ok(),
    })
}

fn render_overview(ctx: &AppContext, out: &mut String, overview: &PersonalOverview) {
    let user = &overview.user;
    heading(out, ctx.t("personal.profile", "Profile"));
    line(out, user.display_name());
    line(out, format!("{}: {}", ctx.t("personal.username", "Username"), user.username));
    line(out, format!("{}: {}", ctx.t("personal.email", "Email"), user.email));
    if let Some(phone) = user.phone.as_deref().filter(|p| !p.is_empty()) {
        line(out, format!("{}: {}", ctx.t("personal.phone", "Phone"), phone));
    }
    let bio = user
        .bio
        .clone()
        .filter(|b| !b.is_empty())
        .unwrap_or_else(|| ctx.t("personal.noBio", "No bio yet"));
    line(out, format!("{}: {}", ctx.t("personal.bio", "Bio"), bio));
    line(out, format!("{} {}", ctx.t("personal.registerTime", "Registered:"), date(user.date_joined)));

    heading(out, ctx.t("personal.membership", "Membership"));
    let membership = &overview.membership;
    if membership.is_active && membership.is_valid {
        line(out, ctx.t("personal.membership.active", "Membership Active"));
        line(
            out,
            format!(
                "{} {}",
                ctx.t("personal.membership.expires", "Expires:"),
                date(membership.end_date)
            ),
        );
    } else {
        line(out, ctx.t("personal.membership.inactive", "No active membership"));
        line(
            out,
            format!(
                "{}: {}/{}",
                ctx.t("personal.membership.price", "Price"),
                money(ctx, ctx.membership.quote(1)),
                ctx.t("common.month", "month")
            ),
        );
    }

    heading(
        out,
        format!(
            "{} ({}/{})",
            ctx.t("personal.items", "My Items"),
            overview.available_items(),
            overview.items.len()
        ),
    );
    for item in &overview.items {
        let status = if item.is_available {
            ctx.t("personal.itemStatus.available", "Available")
        } else {
            ctx.t("personal.itemStatus.sold", "Sold")
        };
        line(out, format!("{}  ({})", item_row(ctx, item), status));
    }

    heading(out, ctx.t("orders.title", "My Orders"));
    if overview.orders.is_empty() {
        line(out, ctx.t("orders.empty", "No orders yet"));
    }
    for order in &overview.orders {
        line(out, order_row(ctx, order));
    }

    if let Some(wishlist) = &overview.wishlist {
        render_wishlist(ctx, out, wishlist);
    }
}

pub async fn personal(
    ctx: &AppContext,
    out: &mut String,
    profile: Option<ProfileForm>,
    membership: Option<MembershipForm>,
) -> Result<(), AppError> {
    let scope = ctx.enter(Route::Personal);
    let Some(mut user) = require_user(ctx, out).await else {
        return Ok(());
    };

    if let Some(form) = profile {
        user = scope.run(ctx.session.update_profile(&form)).await?;
        line(out, ctx.t("personal.saved", "Saved successfully"));
    }

    if let Some(form) = membership {
        let quote = ctx.membership.quote(form.months);
        let result = scope.run(ctx.membership.purchase(&form)).await;
        match result {
            Ok(_) => line(
                out,
                format!(
                    "{} ({})",
                    ctx.t("personal.membership.success", "Membership subscription successful!"),
                    money(ctx, quote)
                ),
            ),
            Err(AppError::Validation(errors)) => {
                let errors = errors
                    .into_iter()
                    .map(|(field, message)| {
                        let text = ctx.t("personal.membership.monthsInvalid", &message);
                        (field, text)
                    })
                    .collect();
                return Err(AppError::Validation(errors));
            }
            Err(e) => {
                return Err(AppError::InvalidInput(e.user_message(
                    &ctx.i18n,
                    "personal.membership.fail",
                    "Subscription failed",
                )))
            }
        }
    }

    let overview = scope.run(load_overview(ctx, user)).await?;
    render_overview(ctx, out, &overview);
    Ok(())
}

// =============================================================================
// Session
// =============================================================================

pub async fn login(ctx: &AppContext, out: &mut String, form: &LoginForm) -> Result<(), AppError> {
    let scope = ctx.enter(Route::Login);

    if let Err(errors) = form.validate() {
        return Err(AppError::Validation(localized_errors(&errors, &ctx.i18n)));
    }

    let credentials = form.credentials();
    let user = scope
        .run(async {
            ctx.session
                .login(&credentials.username, &credentials.password)
                .await
                .map_err(auth_failure)
        })
        .await?;

    ctx.navigator.navigate(Route::Home);
    line(out, ctx.t("auth.login.success", "Logged in successfully"));
    line(out, format!("{}, {}", ctx.t("header.welcome", "Welcome"), user.display_name()));
    Ok(())
}

/// Put every confirmation-related server message under `confirm_password`.
/// When both keys are present, `non_field_errors` wins.
fn register_field_errors(mut errors: FieldErrors) -> FieldErrors {
    let confirm = CONFIRM_FIELD_KEYS
        .iter()
        .rev()
        .find_map(|key| errors.get(*key).cloned());
    errors.retain(|field, _| !CONFIRM_FIELD_KEYS.contains(&field.as_str()));
    if let Some(message) = confirm {
        errors.insert("confirm_password".to_string(), message);
    }
    errors
}

pub async fn register(ctx: &AppContext, out: &mut String, form: &RegisterForm) -> Result<(), AppError> {
    let scope = ctx.enter(Route::Register);

    if let Err(errors) = form.validate() {
        return Err(AppError::Validation(localized_errors(&errors, &ctx.i18n)));
    }

    let outcome = scope
        .run(async { ctx.session.register(form).await.map_err(auth_failure) })
        .await?;

    match outcome {
        RegisterOutcome::Authenticated(user) => {
            ctx.navigator.navigate(Route::Home);
            line(out, ctx.t("auth.register.success", "Registration successful!"));
            line(out, format!("{}, {}", ctx.t("header.welcome", "Welcome"), user.display_name()));
            Ok(())
        }
        RegisterOutcome::RegisteredLoginRequired { message } => {
            ctx.navigator.navigate(Route::Login);
            line(out, ctx.t("auth.register.successButLoginFail", &message));
            line(out, format!("-> {}", Route::Login.path()));
            Ok(())
        }
        RegisterOutcome::Rejected { message, field_errors } => {
            let field_errors = register_field_errors(field_errors);
            if field_errors.is_empty() {
                Err(AppError::InvalidInput(message))
            } else {
                Err(AppError::Validation(field_errors))
            }
        }
    }
}

pub fn logout(ctx: &AppContext, out: &mut String) {
    ctx.session.logout();
    line(out, ctx.t("auth.logout.success", "Logged out"));
}

pub async fn refresh_token(ctx: &AppContext, out: &mut String) -> Result<(), AppError> {
    ctx.session
        .refresh_access_token()
        .await
        .map_err(auth_failure)?;
    line(out, ctx.t("auth.token.refreshed", "Access token refreshed"));
    Ok(())
}

pub fn language(ctx: &AppContext, out: &mut String, change: LanguageChange) -> Result<(), AppError> {
    let lang = match change {
        LanguageChange::Show => {
            let current = ctx.i18n.lang();
            line(out, format!("{}: {} ({})", ctx.t("language.current", "Current language"), current.label(), current.code()));
            for lang in Language::ALL {
                let marker = if lang == current { "*" } else { " " };
                line(out, format!(" {} {}  {}", marker, lang.code(), lang.label()));
            }
            return Ok(());
        }
        LanguageChange::To(lang) => ctx.i18n.change_lang(Some(lang))?,
        LanguageChange::Cycle => ctx.i18n.change_lang(None)?,
    };

    line(out, format!("{}: {} ({})", ctx.t("language.changed", "Language changed"), lang.label(), lang.code()));
    Ok(())
}
