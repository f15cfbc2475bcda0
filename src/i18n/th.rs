//! Thai dictionary.

use std::collections::HashMap;

use once_cell::sync::Lazy;

pub(super) static TH: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // common
        ("common.networkError", "เครือข่ายขัดข้อง กรุณาตรวจสอบการเชื่อมต่อ"),
        ("common.error", "เกิดข้อผิดพลาด"),
        ("common.loading", "กำลังโหลด..."),
        ("common.back", "กลับหน้าแรก"),
        ("common.cancel", "ยกเลิก"),
        ("common.save", "บันทึก"),
        ("common.month", "เดือน"),
        ("common.none", "ไม่มี"),
        // header
        ("header.home", "หน้าแรก"),
        ("header.featured", "สินค้าแนะนำ"),
        ("header.barter", "แลกเปลี่ยน"),
        ("header.search", "ค้นหา"),
        ("header.post", "ลงขายสินค้า"),
        ("header.cart", "ตะกร้า"),
        ("header.orders", "คำสั่งซื้อของฉัน"),
        ("header.wishlist", "รายการโปรด"),
        ("header.chat", "แชท"),
        ("header.wanted", "ประกาศหาซื้อ"),
        ("header.profile", "ข้อมูลส่วนตัว"),
        ("header.login", "เข้าสู่ระบบ"),
        ("header.register", "สมัครสมาชิก"),
        ("header.logout", "ออกจากระบบ"),
        ("header.welcome", "ยินดีต้อนรับ"),
        // language
        ("language.current", "ภาษาปัจจุบัน"),
        ("language.changed", "เปลี่ยนภาษาแล้ว"),
        // auth
        ("auth.login.title", "เข้าสู่ระบบ"),
        ("auth.login.username", "ชื่อผู้ใช้"),
        ("auth.login.password", "รหัสผ่าน"),
        ("auth.login.submit", "เข้าสู่ระบบ"),
        ("auth.login.loading", "กำลังเข้าสู่ระบบ..."),
        ("auth.login.success", "เข้าสู่ระบบสำเร็จ"),
        ("auth.login.fail", "เข้าสู่ระบบล้มเหลว"),
        ("auth.login.usernameRequired", "กรุณากรอกชื่อผู้ใช้"),
        ("auth.login.passwordRequired", "กรุณากรอกรหัสผ่าน"),
        ("auth.login.noAccount", "ยังไม่มีบัญชี?"),
        ("auth.login.required", "กรุณาเข้าสู่ระบบก่อน"),
        ("auth.token.refreshed", "รีเฟรชโทเค็นแล้ว"),
        ("auth.logout.success", "ออกจากระบบแล้ว"),
        ("auth.session.expired", "เซสชันหมดอายุ กรุณาเข้าสู่ระบบอีกครั้ง"),
        ("auth.register.title", "สมัครสมาชิก"),
        ("auth.register.username", "ชื่อผู้ใช้"),
        ("auth.register.email", "อีเมล (@ait.ac.th)"),
        ("auth.register.password", "รหัสผ่าน"),
        ("auth.register.confirmPassword", "ยืนยันรหัสผ่าน"),
        ("auth.register.loading", "กำลังสมัคร..."),
        ("auth.register.success", "สมัครสมาชิกสำเร็จ!"),
        ("auth.register.successButLoginFail", "สมัครสมาชิกสำเร็จ! แต่เข้าสู่ระบบอัตโนมัติไม่สำเร็จ กรุณาเข้าสู่ระบบด้วยตนเอง"),
        ("auth.register.fail", "สมัครสมาชิกล้มเหลว"),
        ("auth.register.usernameRequired", "กรุณากรอกชื่อผู้ใช้"),
        ("auth.register.usernameTooShort", "ชื่อผู้ใช้ต้องมีอย่างน้อย 3 ตัวอักษร"),
        ("auth.register.emailRequired", "กรุณากรอกอีเมล"),
        ("auth.register.emailInvalid", "อีเมลต้องลงท้ายด้วย @ait.ac.th"),
        ("auth.register.passwordRequired", "กรุณากรอกรหัสผ่าน"),
        ("auth.register.passwordTooShort", "รหัสผ่านต้องมีอย่างน้อย 8 ตัวอักษร"),
        ("auth.register.passwordsNotMatch", "รหัสผ่านไม่ตรงกัน"),
        ("auth.register.confirmPasswordRequired", "กรุณายืนยันรหัสผ่าน"),
        // home
        ("home.loading", "กำลังโหลด..."),
        ("home.featured.title", "สินค้าแนะนำ"),
        ("home.featured.noItems", "ยังไม่มีสินค้าแนะนำ"),
        ("home.barter.title", "แลกเปลี่ยน"),
        ("home.barter.noItems", "ยังไม่มีสินค้าแลกเปลี่ยน"),
        ("home.latest.title", "สินค้าล่าสุด"),
        ("home.latest.noProducts", "ยังไม่มีสินค้า"),
        ("home.membership.title", "สิทธิประโยชน์สมาชิก"),
        ("home.membership.active", "สมาชิกของคุณยังใช้งานได้!"),
        ("home.membership.validUntil", "ใช้ได้ถึง:"),
        ("home.membership.unlock", "ปลดล็อกฟีเจอร์พิเศษด้วยการเป็นสมาชิก!"),
        ("home.membership.getStarted", "เริ่มต้นเลย - 199 บาท/เดือน"),
        // featured / barter
        ("featured.title", "สินค้าแนะนำ"),
        ("featured.subtitle", "สินค้าคุณภาพจากสมาชิก"),
        ("featured.noItems", "ยังไม่มีสินค้าแนะนำ"),
        ("featured.noItemsDesc", "สมัครสมาชิกเพื่อแนะนำสินค้าของคุณที่นี่"),
        ("barter.title", "แลกเปลี่ยน"),
        ("barter.subtitle", "ไม่ต้องใช้เงินสด แลกของที่มีกับของที่ต้องการ"),
        ("barter.noItems", "ยังไม่มีสินค้าแลกเปลี่ยน"),
        ("barter.wantToSwap", "ต้องการแลกกับ:"),
        ("barter.acceptsBarter", "รับแลกเปลี่ยน"),
        // item
        ("item.seller", "ผู้ขาย"),
        ("item.condition", "สภาพ"),
        ("item.category", "หมวดหมู่"),
        ("item.location", "สถานที่"),
        ("item.contact", "ติดต่อ"),
        ("item.barter", "แลกเปลี่ยน"),
        ("item.desiredItem", "ต้องการแลกเปลี่ยนกับ"),
        ("item.negotiable", "ต่อรองได้"),
        ("item.priceSymbol", "บาท"),
        ("item.featured", "แนะนำ"),
        ("item.soldOut", "ขายแล้ว"),
        ("item.feature", "ตั้งเป็นสินค้าแนะนำ"),
        ("item.unfeature", "ยกเลิกสินค้าแนะนำ"),
        ("item.featureFail", "ไม่สามารถเปลี่ยนสถานะสินค้าแนะนำได้"),
        ("error.notFound", "ไม่พบสินค้า"),
        // cart
        ("cart.title", "ตะกร้าสินค้า"),
        ("cart.empty", "ตะกร้าว่างเปล่า"),
        ("cart.emptyDesc", "เพิ่มสินค้าลงตะกร้าก่อน"),
        ("cart.add", "เพิ่มลงตะกร้า"),
        ("cart.added", "เพิ่มลงตะกร้าแล้ว"),
        ("cart.updated", "อัปเดตตะกร้าแล้ว"),
        ("cart.removed", "นำออกจากตะกร้าแล้ว"),
        ("cart.cleared", "ล้างตะกร้าแล้ว"),
        ("cart.error", "เกิดข้อผิดพลาด"),
        ("cart.items", "สินค้า"),
        ("cart.pieces", "ชิ้น"),
        ("cart.subtotal", "ยอดรวมย่อย"),
        ("cart.total", "ยอดรวม"),
        ("cart.checkout", "ชำระเงิน"),
        ("cart.quantityInvalid", "จำนวนต้องอยู่ระหว่าง 1 ถึง 99"),
        // wishlist
        ("wishlist.title", "รายการโปรด"),
        ("wishlist.empty", "ยังไม่มีรายการโปรด"),
        ("wishlist.emptyDesc", "เพิ่มสินค้าที่ชอบลงรายการโปรด"),
        ("wishlist.added", "เพิ่มลงรายการโปรดแล้ว"),
        ("wishlist.removed", "นำออกจากรายการโปรดแล้ว"),
        ("wishlist.error", "เกิดข้อผิดพลาด"),
        ("wishlist.notes", "หมายเหตุ"),
        // orders
        ("orders.title", "คำสั่งซื้อของฉัน"),
        ("orders.empty", "ยังไม่มีคำสั่งซื้อ"),
        ("orders.emptyDesc", "เริ่มช้อปปิ้งเลย!"),
        ("orders.quantity", "จำนวน"),
        ("orders.address", "ที่อยู่จัดส่ง"),
        ("orders.date", "วันที่สั่งซื้อ"),
        ("orders.total", "ยอดรวม"),
        ("orders.payment", "การชำระเงิน"),
        ("orders.paid", "ชำระแล้ว"),
        ("orders.unpaid", "ยังไม่ชำระ"),
        ("orders.created", "สั่งซื้อสำเร็จ"),
        ("orders.cancelled", "ยกเลิกคำสั่งซื้อแล้ว"),
        ("orders.notCancellable", "ไม่สามารถยกเลิกคำสั่งซื้อนี้ได้แล้ว"),
        ("orders.error", "ไม่สามารถดำเนินการคำสั่งซื้อได้"),
        ("order.status.pending", "รอดำเนินการ"),
        ("order.status.confirmed", "ยืนยันแล้ว"),
        ("order.status.shipped", "จัดส่งแล้ว"),
        ("order.status.delivered", "ได้รับสินค้าแล้ว"),
        ("order.status.cancelled", "ยกเลิกแล้ว"),
        ("order.status.unknown", "ไม่ทราบสถานะ"),
        // chat
        ("chat.title", "แชท"),
        ("chat.receiver", "รหัสผู้รับ"),
        ("chat.message", "ข้อความ"),
        ("chat.send", "ส่ง"),
        ("chat.sent", "ส่งแล้ว"),
        ("chat.failed", "ส่งไม่สำเร็จ"),
        ("chat.receiverRequired", "กรุณากรอกรหัสผู้รับ"),
        ("chat.empty", "ยังไม่มีข้อความ"),
        ("chat.messageRequired", "ข้อความต้องไม่ว่างเปล่า"),
        // search
        ("search.title", "ค้นหา"),
        ("search.placeholder", "ค้นหาสินค้า..."),
        ("search.results", "ผลการค้นหา"),
        ("search.noResults", "ไม่พบผลลัพธ์"),
        ("search.filters", "ตัวกรอง"),
        // post item
        ("post.title", "ลงขายสินค้า"),
        ("post.steps.basic", "ข้อมูลพื้นฐาน"),
        ("post.steps.detail", "รายละเอียด"),
        ("post.steps.confirm", "ยืนยัน"),
        ("post.titleRequired", "กรุณากรอกชื่อสินค้า"),
        ("post.categoryRequired", "กรุณาเลือกหมวดหมู่"),
        ("post.contactRequired", "กรุณากรอกข้อมูลติดต่อ"),
        ("post.priceInvalid", "ราคาต้องเป็นตัวเลขที่ไม่ติดลบ"),
        ("post.imageInvalid", "กรุณาอัปโหลดไฟล์รูปภาพ"),
        ("post.imageTooLarge", "รูปภาพต้องมีขนาดไม่เกิน 5MB"),
        ("post.imageLimit", "รูปภาพมากเกินไป"),
        ("post.success", "ลงขายสำเร็จ! สินค้าของคุณแสดงแล้ว"),
        ("post.fail", "ลงขายไม่สำเร็จ กรุณาลองใหม่"),
        ("post.networkError", "เครือข่ายขัดข้อง กรุณาตรวจสอบการเชื่อมต่อ"),
        ("post.form.title", "ชื่อสินค้า"),
        ("post.form.category", "หมวดหมู่"),
        ("post.form.price", "ราคา (บาท)"),
        ("post.form.condition", "สภาพสินค้า"),
        ("post.form.description", "รายละเอียดสินค้า"),
        ("post.form.location", "สถานที่"),
        ("post.form.contact", "ข้อมูลติดต่อ"),
        ("post.form.image", "รูปภาพสินค้า"),
        ("post.form.isBarter", "แลกเปลี่ยนเท่านั้น (ไม่มีราคา)"),
        ("post.form.allowBarter", "รับแลกเปลี่ยน"),
        ("post.form.desiredItem", "สิ่งที่ต้องการแลก"),
        ("post.confirm.title", "ยืนยันข้อมูลการลงขาย"),
        ("post.conditions.new", "ใหม่"),
        ("post.conditions.like_new", "เหมือนใหม่"),
        ("post.conditions.good", "ดี"),
        ("post.conditions.fair", "พอใช้"),
        ("post.conditions.poor", "แย่"),
        ("post.categories.phone", "โทรศัพท์"),
        ("post.categories.computer", "คอมพิวเตอร์"),
        ("post.categories.clothing", "เสื้อผ้า"),
        ("post.categories.sports", "กีฬา"),
        ("post.categories.beauty", "ความงาม"),
        ("post.categories.furniture", "เฟอร์นิเจอร์"),
        ("post.categories.books", "หนังสือ"),
        ("post.categories.games", "เกม"),
        ("post.categories.other", "อื่นๆ"),
        // wanted
        ("wanted.title", "ประกาศหาซื้อ"),
        ("wanted.subtitle", "ประกาศสิ่งที่คุณต้องการ แล้วให้ผู้ขายติดต่อคุณ"),
        ("wanted.noItems", "ยังไม่มีประกาศหาซื้อ"),
        ("wanted.noItemsDesc", "ประกาศสิ่งที่ต้องการ แล้วให้ผู้ขายติดต่อคุณ"),
        ("wanted.postWanted", "ลงประกาศหาซื้อ"),
        ("wanted.titleRequired", "กรุณากรอกหัวข้อ"),
        ("wanted.postSuccess", "ลงประกาศสำเร็จ!"),
        ("wanted.postFailed", "ลงประกาศไม่สำเร็จ กรุณาลองใหม่"),
        ("wanted.networkError", "เครือข่ายขัดข้อง กรุณาตรวจสอบการเชื่อมต่อ"),
        ("wanted.paymentRequired", "ต้องชำระค่าประกาศ"),
        ("wanted.paymentNote", "ระบบไม่รองรับการชำระเงินออนไลน์ กรุณาชำระค่าประกาศด้วยวิธีอื่นหลังลงประกาศ หรือติดต่อผู้ดูแลระบบ"),
        ("wanted.freePostsRemaining", "จำนวนประกาศฟรีที่เหลือ"),
        ("wanted.freePostsUsed", "จำนวนประกาศฟรีที่ใช้แล้ว"),
        ("wanted.freePostAvailable", "ลงประกาศฟรีได้"),
        ("wanted.maxPrice", "ราคาสูงสุด"),
        ("wanted.category", "หมวดหมู่"),
        ("wanted.location", "สถานที่"),
        ("wanted.conditionPreference", "สภาพที่ต้องการ"),
        ("wanted.new", "ใหม่"),
        ("wanted.likeNew", "เหมือนใหม่"),
        ("wanted.good", "ดี"),
        ("wanted.fair", "พอใช้"),
        ("wanted.poor", "แย่"),
        ("wanted.any", "สภาพใดก็ได้"),
        // personal
        ("personal.profile", "ข้อมูลส่วนตัว"),
        ("personal.username", "ชื่อผู้ใช้"),
        ("personal.email", "อีเมล"),
        ("personal.phone", "โทรศัพท์"),
        ("personal.bio", "แนะนำตัว"),
        ("personal.noBio", "ยังไม่มีคำแนะนำตัว"),
        ("personal.registerTime", "สมัครเมื่อ:"),
        ("personal.items", "สินค้าของฉัน"),
        ("personal.saved", "บันทึกสำเร็จ"),
        ("personal.saveFailed", "บันทึกไม่สำเร็จ"),
        ("personal.nothingToSave", "ไม่มีข้อมูลที่ต้องอัปเดต"),
        ("personal.itemStatus.available", "พร้อมขาย"),
        ("personal.itemStatus.sold", "ขายแล้ว"),
        ("personal.membership", "สมาชิก"),
        ("personal.membership.active", "สมาชิกใช้งานได้"),
        ("personal.membership.inactive", "ยังไม่มีสมาชิกที่ใช้งานได้"),
        ("personal.membership.expires", "หมดอายุ:"),
        ("personal.membership.price", "ราคา"),
        ("personal.membership.success", "สมัครสมาชิกสำเร็จ!"),
        ("personal.membership.fail", "สมัครสมาชิกไม่สำเร็จ"),
        ("personal.membership.monthsInvalid", "จำนวนเดือนต้องอยู่ระหว่าง 1 ถึง 12"),
    ])
});
