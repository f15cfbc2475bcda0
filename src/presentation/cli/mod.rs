//! Terminal front end.
//!
//! One subcommand per page. Each invocation enters the page, runs its
//! requests through a [`PageScope`](crate::presentation::scope::PageScope)
//! and returns the rendered text.

pub mod pages;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::application::dto::{
    LoginForm, MembershipForm, MessageForm, OrderForm, ProfileForm, RegisterForm, WantedForm,
};
use crate::domain::{Condition, Language, Price, SearchQuery};
use crate::presentation::wizard::ItemDraft;
use crate::shared::error::AppError;
use crate::startup::AppContext;

#[derive(Debug, Parser)]
#[command(
    name = "campus-market",
    about = "Terminal client for the campus second-hand marketplace",
    version
)]
pub struct Cli {
    /// Use this language for this run only (en, zh, th).
    #[arg(long, global = true, value_parser = parse_language)]
    pub lang: Option<Language>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Featured, barter and latest items
    Home,
    /// Items promoted by members
    Featured,
    /// Items offered for swap
    Barter,
    /// One item, with optional cart/wishlist/feature actions
    Item(ItemArgs),
    /// Search listings
    Search(SearchArgs),
    /// Your cart
    Cart {
        #[command(subcommand)]
        action: Option<CartAction>,
    },
    /// Your orders
    Orders {
        #[command(subcommand)]
        action: Option<OrderAction>,
    },
    /// Your saved items
    Wishlist {
        /// Remove this item id
        #[arg(long, value_name = "item")]
        remove: Option<i64>,
    },
    /// Direct messages
    Chat(ChatArgs),
    /// Post an item for sale or swap
    Post(PostArgs),
    /// Request-to-buy posts
    Wanted {
        /// Only your own posts
        #[arg(long)]
        mine: bool,
    },
    /// Publish a request-to-buy post
    WantedNew(WantedArgs),
    /// Profile, listings, membership
    Personal(PersonalArgs),
    /// Log in
    Login {
        username: String,
        /// Falls back to CAMPUS_MARKET_PASSWORD
        #[arg(long, env = "CAMPUS_MARKET_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account
    Register {
        #[arg(long)]
        username: String,
        /// Must end with @ait.ac.th
        #[arg(long)]
        email: String,
        #[arg(long, env = "CAMPUS_MARKET_PASSWORD", hide_env_values = true)]
        password: String,
        /// Defaults to the password
        #[arg(long)]
        confirm_password: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// Exchange the refresh token for a new access token
    RefreshToken,
    /// Show or change the language
    Lang {
        /// en, zh or th; omit with --next to cycle
        #[arg(value_parser = parse_language)]
        code: Option<Language>,
        #[arg(long, conflicts_with = "code")]
        next: bool,
    },
}

#[derive(Debug, Clone, Args)]
pub struct ItemArgs {
    pub id: i64,
    /// Put one unit in the cart
    #[arg(long)]
    pub add_to_cart: bool,
    /// Save to the wishlist
    #[arg(long)]
    pub wishlist: bool,
    /// Note stored with the wishlist entry
    #[arg(long, requires = "wishlist")]
    pub notes: Option<String>,
    /// Promote the item (owner with membership)
    #[arg(long, conflicts_with = "unfeature")]
    pub feature: bool,
    #[arg(long)]
    pub unfeature: bool,
}

#[derive(Debug, Clone, Default, Args)]
pub struct SearchArgs {
    #[arg(default_value = "")]
    pub q: String,
    #[arg(long, default_value = "")]
    pub category: String,
    #[arg(long, value_parser = parse_price)]
    pub min_price: Option<Price>,
    #[arg(long, value_parser = parse_price)]
    pub max_price: Option<Price>,
    #[arg(long, value_parser = parse_condition)]
    pub condition: Option<Condition>,
    #[arg(long, default_value = "")]
    pub location: String,
    #[arg(long)]
    pub barter: Option<bool>,
    #[arg(long)]
    pub sort_by: Option<String>,
    #[arg(long)]
    pub sort_order: Option<String>,
}

impl SearchArgs {
    pub fn query(&self) -> SearchQuery {
        SearchQuery {
            q: self.q.trim().to_string(),
            category: self.category.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            condition: self.condition,
            location: self.location.clone(),
            is_barter: self.barter,
            sort_by: self.sort_by.clone(),
            sort_order: self.sort_order.clone(),
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum CartAction {
    /// Set a line's quantity (1..=99; below 1 is ignored)
    Update { item: i64, quantity: u32 },
    Remove { item: i64 },
    Clear,
    /// Continue to the order form
    Checkout,
}

#[derive(Debug, Clone, Subcommand)]
pub enum OrderAction {
    /// Place an order
    Create {
        #[arg(long)]
        item: i64,
        #[arg(long, default_value_t = 1)]
        quantity: u32,
        #[arg(long, default_value = "")]
        address: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
    Cancel { id: i64 },
}

#[derive(Debug, Clone, Args)]
pub struct ChatArgs {
    /// Receiver user id; sends `--text` to them
    #[arg(long, requires = "text")]
    pub to: Option<i64>,
    #[arg(long)]
    pub text: Option<String>,
    /// Item the message is about
    #[arg(long)]
    pub item: Option<i64>,
    /// Keep polling and print each refresh, for this many seconds
    #[arg(long, value_name = "secs")]
    pub watch: Option<u64>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct PostArgs {
    #[arg(long, default_value = "")]
    pub title: String,
    #[arg(long, default_value = "")]
    pub category: String,
    #[arg(long, default_value = "")]
    pub condition: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, default_value = "")]
    pub price: String,
    #[arg(long, default_value = "")]
    pub location: String,
    #[arg(long, default_value = "")]
    pub contact: String,
    /// Swap only, no price
    #[arg(long)]
    pub barter: bool,
    #[arg(long)]
    pub allow_barter: bool,
    #[arg(long, default_value = "")]
    pub desired_item: String,
    /// Image file; repeat for more
    #[arg(long = "image", value_name = "path")]
    pub images: Vec<PathBuf>,
}

impl PostArgs {
    pub fn draft(&self) -> ItemDraft {
        ItemDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            price: self.price.clone(),
            category: self.category.clone(),
            condition: self.condition.clone(),
            is_barter: self.barter,
            allow_barter: self.allow_barter,
            desired_item: self.desired_item.clone(),
            location: self.location.clone(),
            contact_phone: self.contact.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct WantedArgs {
    #[arg(long, default_value = "")]
    pub title: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, default_value = "")]
    pub max_price: String,
    #[arg(long, default_value = "")]
    pub category: String,
    #[arg(long, default_value = "any")]
    pub condition: String,
    #[arg(long, default_value = "")]
    pub contact: String,
    #[arg(long, default_value = "")]
    pub location: String,
}

impl WantedArgs {
    pub fn form(&self) -> WantedForm {
        WantedForm {
            title: self.title.clone(),
            description: self.description.clone(),
            max_price: self.max_price.clone(),
            category: self.category.clone(),
            condition_preference: self.condition.clone(),
            contact_phone: self.contact.clone(),
            location: self.location.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct PersonalArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub bio: Option<String>,
    /// Buy or extend membership for this many months
    #[arg(long, value_name = "months")]
    pub buy_membership: Option<u32>,
}

impl PersonalArgs {
    /// Profile edits, if any field was given.
    pub fn profile(&self) -> Option<ProfileForm> {
        let form = ProfileForm {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone: self.phone.clone(),
            bio: self.bio.clone(),
        };
        (!form.update().is_empty()).then_some(form)
    }
}

impl Command {
    /// Translation key and text shown when the page fails without a server message.
    pub fn failure_text(&self) -> (&'static str, &'static str) {
        match self {
            Command::Login { .. } => ("auth.login.fail", "Login failed"),
            Command::Register { .. } => ("auth.register.fail", "Registration failed, please try again"),
            Command::Cart { .. } => ("cart.error", "Something went wrong with your cart"),
            Command::Orders { .. } => ("orders.error", "Could not process the order"),
            Command::Wishlist { .. } => ("wishlist.error", "Something went wrong with your wishlist"),
            Command::Chat(_) => ("chat.failed", "Failed"),
            Command::Post(_) => ("post.fail", "Posting failed, please try again"),
            Command::WantedNew(_) => ("wanted.postFailed", "Posting failed, please try again"),
            Command::Personal(_) => ("personal.saveFailed", "Save failed"),
            Command::Item(_) => ("error.notFound", "Item not found"),
            _ => ("common.error", "Something went wrong"),
        }
    }
}

fn parse_language(raw: &str) -> Result<Language, String> {
    Language::from_code(raw.trim()).ok_or_else(|| format!("unsupported language: {raw} (expected en, zh or th)"))
}

fn parse_price(raw: &str) -> Result<Price, String> {
    raw.parse::<Price>().map_err(|e| e.to_string())
}

fn parse_condition(raw: &str) -> Result<Condition, String> {
    Condition::from_str(raw).ok_or_else(|| format!("unknown condition: {raw}"))
}

/// Run one command against the context and return the rendered page.
pub async fn dispatch(ctx: &AppContext, command: Command) -> Result<String, AppError> {
    let mut out = String::new();

    match command {
        Command::Home => pages::home(ctx, &mut out).await?,
        Command::Featured => pages::featured(ctx, &mut out).await?,
        Command::Barter => pages::barter(ctx, &mut out).await?,
        Command::Item(args) => pages::item(ctx, &mut out, &args).await?,
        Command::Search(args) => pages::search(ctx, &mut out, &args.query()).await?,
        Command::Cart { action } => pages::cart(ctx, &mut out, action).await?,
        Command::Orders { action } => {
            let action = action.map(|a| match a {
                OrderAction::Create {
                    item,
                    quantity,
                    address,
                    notes,
                } => pages::OrderCommand::Create(OrderForm {
                    item,
                    quantity,
                    shipping_address: address,
                    notes,
                }),
                OrderAction::Cancel { id } => pages::OrderCommand::Cancel(id),
            });
            pages::orders(ctx, &mut out, action).await?
        }
        Command::Wishlist { remove } => pages::wishlist(ctx, &mut out, remove).await?,
        Command::Chat(args) => {
            let send = match (args.to, args.text) {
                (Some(receiver), Some(text)) => Some(MessageForm {
                    receiver,
                    text,
                    item: args.item,
                }),
                _ => None,
            };
            pages::chat(ctx, &mut out, send, args.watch).await?
        }
        Command::Post(args) => pages::post_item(ctx, &mut out, args.draft(), &args.images).await?,
        Command::Wanted { mine } => pages::wanted(ctx, &mut out, mine).await?,
        Command::WantedNew(args) => pages::new_wanted(ctx, &mut out, &args.form()).await?,
        Command::Personal(args) => {
            let membership = args.buy_membership.map(|months| MembershipForm { months });
            pages::personal(ctx, &mut out, args.profile(), membership).await?
        }
        Command::Login { username, password } => {
            pages::login(ctx, &mut out, &LoginForm { username, password }).await?
        }
        Command::Register {
            username,
            email,
            password,
            confirm_password,
        } => {
            let form = RegisterForm::new(username, email, password, confirm_password);
            pages::register(ctx, &mut out, &form).await?
        }
        Command::Logout => pages::logout(ctx, &mut out),
        Command::RefreshToken => pages::refresh_token(ctx, &mut out).await?,
        Command::Lang { code, next } => {
            let target = match (code, next) {
                (Some(lang), _) => pages::LanguageChange::To(lang),
                (None, true) => pages::LanguageChange::Cycle,
                (None, false) => pages::LanguageChange::Show,
            };
            pages::language(ctx, &mut out, target)?
        }
    }

    Ok(out)
}
