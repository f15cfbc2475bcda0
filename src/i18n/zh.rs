//! Chinese dictionary.

use std::collections::HashMap;

use once_cell::sync::Lazy;

pub(super) static ZH: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // common
        ("common.networkError", "网络错误，请检查连接"),
        ("common.error", "出错了"),
        ("common.loading", "加载中..."),
        ("common.back", "返回首页"),
        ("common.cancel", "取消"),
        ("common.save", "保存"),
        ("common.month", "月"),
        ("common.none", "无"),
        // header
        ("header.home", "首页"),
        ("header.featured", "精选"),
        ("header.barter", "以物换物"),
        ("header.search", "搜索"),
        ("header.post", "发布商品"),
        ("header.cart", "购物车"),
        ("header.orders", "我的订单"),
        ("header.wishlist", "收藏"),
        ("header.chat", "消息"),
        ("header.wanted", "求购"),
        ("header.profile", "个人信息"),
        ("header.login", "登录"),
        ("header.register", "注册"),
        ("header.logout", "登出"),
        ("header.welcome", "欢迎"),
        // language
        ("language.current", "当前语言"),
        ("language.changed", "语言已切换"),
        // auth
        ("auth.login.title", "登录"),
        ("auth.login.username", "用户名"),
        ("auth.login.password", "密码"),
        ("auth.login.submit", "登录"),
        ("auth.login.loading", "登录中..."),
        ("auth.login.success", "登录成功"),
        ("auth.login.fail", "登录失败"),
        ("auth.login.usernameRequired", "请输入用户名"),
        ("auth.login.passwordRequired", "请输入密码"),
        ("auth.login.noAccount", "还没有账号？"),
        ("auth.login.required", "请先登录"),
        ("auth.token.refreshed", "访问令牌已刷新"),
        ("auth.logout.success", "已登出"),
        ("auth.session.expired", "登录已过期，请重新登录"),
        ("auth.register.title", "注册"),
        ("auth.register.username", "用户名"),
        ("auth.register.email", "邮箱 (@ait.ac.th)"),
        ("auth.register.password", "密码"),
        ("auth.register.confirmPassword", "确认密码"),
        ("auth.register.loading", "注册中..."),
        ("auth.register.success", "注册成功！"),
        ("auth.register.successButLoginFail", "注册成功！但自动登录失败，请手动登录"),
        ("auth.register.fail", "注册失败，请重试"),
        ("auth.register.usernameRequired", "用户名不能为空"),
        ("auth.register.usernameTooShort", "用户名至少需要3个字符"),
        ("auth.register.emailRequired", "邮箱不能为空"),
        ("auth.register.emailInvalid", "邮箱必须是以@ait.ac.th结尾"),
        ("auth.register.passwordRequired", "密码不能为空"),
        ("auth.register.passwordTooShort", "密码至少需要8个字符"),
        ("auth.register.passwordsNotMatch", "两次输入的密码不一致"),
        ("auth.register.confirmPasswordRequired", "请确认密码"),
        // home
        ("home.loading", "加载中..."),
        ("home.featured.title", "精选商品"),
        ("home.featured.noItems", "暂无精选商品"),
        ("home.barter.title", "以物换物"),
        ("home.barter.noItems", "暂无换物商品"),
        ("home.latest.title", "最新商品"),
        ("home.latest.noProducts", "暂无商品"),
        ("home.membership.title", "会员权益"),
        ("home.membership.active", "您的会员已生效！"),
        ("home.membership.validUntil", "有效期至："),
        ("home.membership.unlock", "开通会员，解锁专属功能！"),
        ("home.membership.getStarted", "立即开通 - 199 泰铢/月"),
        // featured / barter
        ("featured.title", "精选商品"),
        ("featured.subtitle", "来自会员的优质精选商品"),
        ("featured.noItems", "暂无精选商品"),
        ("featured.noItemsDesc", "成为会员即可在此展示您的商品"),
        ("barter.title", "以物换物"),
        ("barter.subtitle", "无需现金，用你拥有的换你需要的"),
        ("barter.noItems", "暂无换物商品"),
        ("barter.wantToSwap", "想换："),
        ("barter.acceptsBarter", "接受换物"),
        // item
        ("item.seller", "卖家"),
        ("item.condition", "成色"),
        ("item.category", "分类"),
        ("item.location", "位置"),
        ("item.contact", "联系方式"),
        ("item.barter", "换物"),
        ("item.desiredItem", "希望换取"),
        ("item.negotiable", "面议"),
        ("item.priceSymbol", "泰铢"),
        ("item.featured", "精选"),
        ("item.soldOut", "已售出"),
        ("item.feature", "设为精选"),
        ("item.unfeature", "取消精选"),
        ("item.featureFail", "无法修改精选状态"),
        ("error.notFound", "商品不存在"),
        // cart
        ("cart.title", "购物车"),
        ("cart.empty", "购物车是空的"),
        ("cart.emptyDesc", "先去添加商品吧"),
        ("cart.add", "加入购物车"),
        ("cart.added", "已加入购物车"),
        ("cart.updated", "购物车已更新"),
        ("cart.removed", "已从购物车移除"),
        ("cart.cleared", "购物车已清空"),
        ("cart.error", "购物车操作失败"),
        ("cart.items", "商品"),
        ("cart.pieces", "件"),
        ("cart.subtotal", "小计"),
        ("cart.total", "合计"),
        ("cart.checkout", "去结算"),
        ("cart.quantityInvalid", "数量必须在1到99之间"),
        // wishlist
        ("wishlist.title", "我的收藏"),
        ("wishlist.empty", "暂无收藏"),
        ("wishlist.emptyDesc", "收藏喜欢的商品，方便随时查看"),
        ("wishlist.added", "已加入收藏"),
        ("wishlist.removed", "已取消收藏"),
        ("wishlist.error", "收藏操作失败"),
        ("wishlist.notes", "备注"),
        // orders
        ("orders.title", "我的订单"),
        ("orders.empty", "暂无订单"),
        ("orders.emptyDesc", "现在就去逛逛吧！"),
        ("orders.quantity", "数量"),
        ("orders.address", "收货地址"),
        ("orders.date", "下单时间"),
        ("orders.total", "总价"),
        ("orders.payment", "支付状态"),
        ("orders.paid", "已支付"),
        ("orders.unpaid", "未支付"),
        ("orders.created", "下单成功"),
        ("orders.cancelled", "订单已取消"),
        ("orders.notCancellable", "该订单已无法取消"),
        ("orders.error", "订单处理失败"),
        ("order.status.pending", "待确认"),
        ("order.status.confirmed", "已确认"),
        ("order.status.shipped", "已发货"),
        ("order.status.delivered", "已送达"),
        ("order.status.cancelled", "已取消"),
        ("order.status.unknown", "未知"),
        // chat
        ("chat.title", "消息"),
        ("chat.receiver", "接收者 ID"),
        ("chat.message", "消息内容"),
        ("chat.send", "发送"),
        ("chat.sent", "已发送"),
        ("chat.failed", "发送失败"),
        ("chat.receiverRequired", "请输入接收者 ID"),
        ("chat.empty", "暂无消息"),
        ("chat.messageRequired", "消息不能为空"),
        // search
        ("search.title", "搜索"),
        ("search.placeholder", "搜索商品..."),
        ("search.results", "搜索结果"),
        ("search.noResults", "没有找到结果"),
        ("search.filters", "筛选"),
        // post item
        ("post.title", "发布商品"),
        ("post.steps.basic", "基本信息"),
        ("post.steps.detail", "详细信息"),
        ("post.steps.confirm", "发布确认"),
        ("post.titleRequired", "标题为必填项"),
        ("post.categoryRequired", "分类为必填项"),
        ("post.contactRequired", "联系方式为必填项"),
        ("post.priceInvalid", "价格必须是非负数"),
        ("post.imageInvalid", "请上传图片文件"),
        ("post.imageTooLarge", "图片大小不能超过5MB"),
        ("post.imageLimit", "图片数量过多"),
        ("post.success", "发布成功！商品已上架"),
        ("post.fail", "发布失败，请重试"),
        ("post.networkError", "网络错误，请检查连接"),
        ("post.form.title", "商品标题"),
        ("post.form.category", "商品分类"),
        ("post.form.price", "售价 (泰铢)"),
        ("post.form.condition", "商品成色"),
        ("post.form.description", "商品描述"),
        ("post.form.location", "所在位置"),
        ("post.form.contact", "联系方式"),
        ("post.form.image", "商品图片"),
        ("post.form.isBarter", "仅换物（无价格）"),
        ("post.form.allowBarter", "接受换物"),
        ("post.form.desiredItem", "希望换取的物品"),
        ("post.confirm.title", "确认发布信息"),
        ("post.conditions.new", "全新"),
        ("post.conditions.like_new", "几乎全新"),
        ("post.conditions.good", "良好"),
        ("post.conditions.fair", "一般"),
        ("post.conditions.poor", "较差"),
        ("post.categories.phone", "手机"),
        ("post.categories.computer", "电脑"),
        ("post.categories.clothing", "服饰"),
        ("post.categories.sports", "运动"),
        ("post.categories.beauty", "美妆"),
        ("post.categories.furniture", "家具"),
        ("post.categories.books", "图书"),
        ("post.categories.games", "游戏"),
        ("post.categories.other", "其他"),
        // wanted
        ("wanted.title", "求购信息"),
        ("wanted.subtitle", "发布你的需求，让卖家联系你"),
        ("wanted.noItems", "暂无求购信息"),
        ("wanted.noItemsDesc", "发布求购信息，让卖家联系你"),
        ("wanted.postWanted", "发布求购"),
        ("wanted.titleRequired", "标题为必填项"),
        ("wanted.postSuccess", "发布成功！"),
        ("wanted.postFailed", "发布失败，请重试"),
        ("wanted.networkError", "网络错误，请检查连接"),
        ("wanted.paymentRequired", "需要付费"),
        ("wanted.paymentNote", "由于平台不支持在线支付，请在发布后通过其他方式完成支付，或联系管理员。"),
        ("wanted.freePostsRemaining", "剩余免费发布次数"),
        ("wanted.freePostsUsed", "已用免费发布次数"),
        ("wanted.freePostAvailable", "可免费发布"),
        ("wanted.maxPrice", "最高价格"),
        ("wanted.category", "分类"),
        ("wanted.location", "位置"),
        ("wanted.conditionPreference", "成色要求"),
        ("wanted.new", "全新"),
        ("wanted.likeNew", "近新"),
        ("wanted.good", "良好"),
        ("wanted.fair", "一般"),
        ("wanted.poor", "较差"),
        ("wanted.any", "任意"),
        // personal
        ("personal.profile", "个人资料"),
        ("personal.username", "用户名"),
        ("personal.email", "邮箱"),
        ("personal.phone", "电话"),
        ("personal.bio", "个人简介"),
        ("personal.noBio", "暂无简介"),
        ("personal.registerTime", "注册时间："),
        ("personal.items", "我的商品"),
        ("personal.saved", "保存成功"),
        ("personal.saveFailed", "保存失败"),
        ("personal.nothingToSave", "没有需要更新的内容"),
        ("personal.itemStatus.available", "在售"),
        ("personal.itemStatus.sold", "已售出"),
        ("personal.membership", "会员"),
        ("personal.membership.active", "会员有效"),
        ("personal.membership.inactive", "暂无有效会员"),
        ("personal.membership.expires", "到期时间："),
        ("personal.membership.price", "价格"),
        ("personal.membership.success", "会员开通成功！"),
        ("personal.membership.fail", "开通失败"),
        ("personal.membership.monthsInvalid", "月数必须在1到12之间"),
    ])
});
