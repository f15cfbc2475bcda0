//! English dictionary.

use std::collections::HashMap;

use once_cell::sync::Lazy;

pub(super) static EN: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // common
        ("common.networkError", "Network error, please check your connection"),
        ("common.error", "Something went wrong"),
        ("common.loading", "Loading..."),
        ("common.back", "Back to home"),
        ("common.cancel", "Cancel"),
        ("common.save", "Save"),
        ("common.month", "month"),
        ("common.none", "None"),
        // header
        ("header.home", "Home"),
        ("header.featured", "Featured"),
        ("header.barter", "Barter"),
        ("header.search", "Search"),
        ("header.post", "Post Item"),
        ("header.cart", "Cart"),
        ("header.orders", "My Orders"),
        ("header.wishlist", "Wishlist"),
        ("header.chat", "Chat"),
        ("header.wanted", "Wanted"),
        ("header.profile", "Profile"),
        ("header.login", "Log in"),
        ("header.register", "Sign up"),
        ("header.logout", "Log out"),
        ("header.welcome", "Welcome"),
        // language
        ("language.current", "Current language"),
        ("language.changed", "Language changed"),
        // auth
        ("auth.login.title", "Log in"),
        ("auth.login.username", "Username"),
        ("auth.login.password", "Password"),
        ("auth.login.submit", "Log in"),
        ("auth.login.loading", "Logging in..."),
        ("auth.login.success", "Logged in successfully"),
        ("auth.login.fail", "Login failed"),
        ("auth.login.usernameRequired", "Username is required"),
        ("auth.login.passwordRequired", "Password is required"),
        ("auth.login.noAccount", "No account yet?"),
        ("auth.login.required", "Please log in to continue"),
        ("auth.token.refreshed", "Access token refreshed"),
        ("auth.logout.success", "Logged out"),
        ("auth.session.expired", "Your session has expired, please log in again"),
        ("auth.register.title", "Sign up"),
        ("auth.register.username", "Username"),
        ("auth.register.email", "Email (@ait.ac.th)"),
        ("auth.register.password", "Password"),
        ("auth.register.confirmPassword", "Confirm password"),
        ("auth.register.loading", "Signing up..."),
        ("auth.register.success", "Registration successful!"),
        ("auth.register.successButLoginFail", "Registration successful! Automatic login failed, please log in manually"),
        ("auth.register.fail", "Registration failed, please try again"),
        ("auth.register.usernameRequired", "Username is required"),
        ("auth.register.usernameTooShort", "Username must be at least 3 characters"),
        ("auth.register.emailRequired", "Email is required"),
        ("auth.register.emailInvalid", "Email must end with @ait.ac.th"),
        ("auth.register.passwordRequired", "Password is required"),
        ("auth.register.passwordTooShort", "Password must be at least 8 characters"),
        ("auth.register.passwordsNotMatch", "Passwords do not match"),
        ("auth.register.confirmPasswordRequired", "Please confirm your password"),
        // home
        ("home.loading", "Loading..."),
        ("home.featured.title", "Featured Items"),
        ("home.featured.noItems", "No featured items yet"),
        ("home.barter.title", "Barter"),
        ("home.barter.noItems", "No barter items yet"),
        ("home.latest.title", "Latest Items"),
        ("home.latest.noProducts", "No items available yet"),
        ("home.membership.title", "Membership Benefits"),
        ("home.membership.active", "Your membership is active!"),
        ("home.membership.validUntil", "Valid until:"),
        ("home.membership.unlock", "Unlock exclusive features with membership!"),
        ("home.membership.getStarted", "Get Started - 199 THB/month"),
        // featured / barter
        ("featured.title", "Featured Items"),
        ("featured.subtitle", "High-quality featured items from members"),
        ("featured.noItems", "No featured items yet"),
        ("featured.noItemsDesc", "Become a member to feature your items here"),
        ("barter.title", "Barter"),
        ("barter.subtitle", "No cash needed, swap what you have for what you need"),
        ("barter.noItems", "No barter items yet"),
        ("barter.wantToSwap", "Want to swap:"),
        ("barter.acceptsBarter", "Accepts Barter"),
        // item
        ("item.seller", "Seller"),
        ("item.condition", "Condition"),
        ("item.category", "Category"),
        ("item.location", "Location"),
        ("item.contact", "Contact"),
        ("item.barter", "Barter"),
        ("item.desiredItem", "Wants in exchange"),
        ("item.negotiable", "Negotiable"),
        ("item.priceSymbol", "THB"),
        ("item.featured", "Featured"),
        ("item.soldOut", "Sold Out"),
        ("item.feature", "Feature this item"),
        ("item.unfeature", "Remove from featured"),
        ("item.featureFail", "Could not change the featured flag"),
        ("error.notFound", "Item not found"),
        // cart
        ("cart.title", "Shopping Cart"),
        ("cart.empty", "Cart is empty"),
        ("cart.emptyDesc", "Add items to your cart first"),
        ("cart.add", "Add to cart"),
        ("cart.added", "Added to cart"),
        ("cart.updated", "Cart updated"),
        ("cart.removed", "Removed from cart"),
        ("cart.cleared", "Cart cleared"),
        ("cart.error", "Something went wrong with your cart"),
        ("cart.items", "Items"),
        ("cart.pieces", "pieces"),
        ("cart.subtotal", "Subtotal"),
        ("cart.total", "Total"),
        ("cart.checkout", "Checkout"),
        ("cart.quantityInvalid", "Quantity must be between 1 and 99"),
        // wishlist
        ("wishlist.title", "Wishlist"),
        ("wishlist.empty", "No favorites yet"),
        ("wishlist.emptyDesc", "Add items you like to your wishlist"),
        ("wishlist.added", "Added to wishlist"),
        ("wishlist.removed", "Removed from wishlist"),
        ("wishlist.error", "Something went wrong with your wishlist"),
        ("wishlist.notes", "Notes"),
        // orders
        ("orders.title", "My Orders"),
        ("orders.empty", "No orders yet"),
        ("orders.emptyDesc", "Start shopping now!"),
        ("orders.quantity", "Quantity"),
        ("orders.address", "Shipping Address"),
        ("orders.date", "Order Date"),
        ("orders.total", "Total"),
        ("orders.payment", "Payment"),
        ("orders.paid", "Paid"),
        ("orders.unpaid", "Unpaid"),
        ("orders.created", "Order placed"),
        ("orders.cancelled", "Order cancelled"),
        ("orders.notCancellable", "This order can no longer be cancelled"),
        ("orders.error", "Could not process the order"),
        ("order.status.pending", "Pending"),
        ("order.status.confirmed", "Confirmed"),
        ("order.status.shipped", "Shipped"),
        ("order.status.delivered", "Delivered"),
        ("order.status.cancelled", "Cancelled"),
        ("order.status.unknown", "Unknown"),
        // chat
        ("chat.title", "Chat"),
        ("chat.receiver", "Receiver ID"),
        ("chat.message", "Message"),
        ("chat.send", "Send"),
        ("chat.sent", "Sent"),
        ("chat.failed", "Failed"),
        ("chat.receiverRequired", "Receiver ID is required"),
        ("chat.empty", "No messages yet"),
        ("chat.messageRequired", "Message cannot be empty"),
        // search
        ("search.title", "Search"),
        ("search.placeholder", "Search items..."),
        ("search.results", "Results"),
        ("search.noResults", "No results found"),
        ("search.filters", "Filters"),
        // post item
        ("post.title", "Post an Item"),
        ("post.steps.basic", "Basic Info"),
        ("post.steps.detail", "Details"),
        ("post.steps.confirm", "Confirm"),
        ("post.titleRequired", "Title is required"),
        ("post.categoryRequired", "Category is required"),
        ("post.contactRequired", "Contact information is required"),
        ("post.priceInvalid", "Price must be a non-negative number"),
        ("post.imageInvalid", "Please upload an image file"),
        ("post.imageTooLarge", "Image size must be less than 5MB"),
        ("post.imageLimit", "Too many images"),
        ("post.success", "Posted successfully! Your item is now listed"),
        ("post.fail", "Posting failed, please try again"),
        ("post.networkError", "Network error, please check your connection"),
        ("post.form.title", "Title"),
        ("post.form.category", "Category"),
        ("post.form.price", "Price (THB)"),
        ("post.form.condition", "Condition"),
        ("post.form.description", "Description"),
        ("post.form.location", "Location"),
        ("post.form.contact", "Contact"),
        ("post.form.image", "Images"),
        ("post.form.isBarter", "Barter only (no price)"),
        ("post.form.allowBarter", "Accepts barter"),
        ("post.form.desiredItem", "Desired item"),
        ("post.confirm.title", "Confirm your listing"),
        ("post.conditions.new", "New"),
        ("post.conditions.like_new", "Like new"),
        ("post.conditions.good", "Good"),
        ("post.conditions.fair", "Fair"),
        ("post.conditions.poor", "Poor"),
        ("post.categories.phone", "Phones"),
        ("post.categories.computer", "Computers"),
        ("post.categories.clothing", "Clothing"),
        ("post.categories.sports", "Sports"),
        ("post.categories.beauty", "Beauty"),
        ("post.categories.furniture", "Furniture"),
        ("post.categories.books", "Books"),
        ("post.categories.games", "Games"),
        ("post.categories.other", "Other"),
        // wanted
        ("wanted.title", "Wanted Items"),
        ("wanted.subtitle", "Post what you need and let sellers contact you"),
        ("wanted.noItems", "No wanted items yet"),
        ("wanted.noItemsDesc", "Post your wanted items and let sellers contact you"),
        ("wanted.postWanted", "Post Wanted"),
        ("wanted.titleRequired", "Title is required"),
        ("wanted.postSuccess", "Posted successfully!"),
        ("wanted.postFailed", "Posting failed, please try again"),
        ("wanted.networkError", "Network error, please check your connection"),
        ("wanted.paymentRequired", "Payment Required"),
        ("wanted.paymentNote", "Online payment is not supported. Please pay the posting fee by other means after posting, or contact an administrator."),
        ("wanted.freePostsRemaining", "Free posts remaining"),
        ("wanted.freePostsUsed", "Free posts used"),
        ("wanted.freePostAvailable", "Free post available"),
        ("wanted.maxPrice", "Max Price"),
        ("wanted.category", "Category"),
        ("wanted.location", "Location"),
        ("wanted.conditionPreference", "Condition Preference"),
        ("wanted.new", "New"),
        ("wanted.likeNew", "Like new"),
        ("wanted.good", "Good"),
        ("wanted.fair", "Fair"),
        ("wanted.poor", "Poor"),
        ("wanted.any", "Any"),
        // personal
        ("personal.profile", "Profile"),
        ("personal.username", "Username"),
        ("personal.email", "Email"),
        ("personal.phone", "Phone"),
        ("personal.bio", "Bio"),
        ("personal.noBio", "No bio yet"),
        ("personal.registerTime", "Registered:"),
        ("personal.items", "My Items"),
        ("personal.saved", "Saved successfully"),
        ("personal.saveFailed", "Save failed"),
        ("personal.nothingToSave", "Nothing to update"),
        ("personal.itemStatus.available", "Available"),
        ("personal.itemStatus.sold", "Sold"),
        ("personal.membership", "Membership"),
        ("personal.membership.active", "Membership Active"),
        ("personal.membership.inactive", "No active membership"),
        ("personal.membership.expires", "Expires:"),
        ("personal.membership.price", "Price"),
        ("personal.membership.success", "Membership subscription successful!"),
        ("personal.membership.fail", "Subscription failed"),
        ("personal.membership.monthsInvalid", "Months must be between 1 and 12"),
    ])
});
