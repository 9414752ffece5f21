//! The built-in inquiry form.

use std::sync::LazyLock;

use crate::model::FieldDescriptor;

static INQUIRY_FORM: LazyLock<Vec<FieldDescriptor>> = LazyLock::new(|| {
    vec![
        FieldDescriptor::text("name", "お名前", "例）山田　太郎"),
        FieldDescriptor::email("email", "メールアドレス", "例）example@gmail.com"),
        FieldDescriptor::tel("tel", "電話番号", "例）080-1234-5678"),
        FieldDescriptor::text("address", "ご住所", "例）東京都千代田区丸の内1丁目9-2"),
        FieldDescriptor::radio(
            "contact",
            "ご希望の返信方法",
            [("メール", 0), ("電話", 1), ("どちらでも可", 2)],
        ),
        FieldDescriptor::checkbox(
            "time",
            "連絡可能な時間帯（電話）",
            [("09:00〜12:00", 0), ("13:00〜16:00", 1), ("16:00〜19:00", 2)],
        ),
        FieldDescriptor::select(
            "inquiry_kind",
            "お問い合せの種類",
            [("返品について", 0), ("発送について", 1), ("その他", 2)],
        ),
        FieldDescriptor::textarea(
            "inquiry_detail",
            "お問い合せ内容",
            "例）お問い合わせ内容詳細をご記入ください",
        ),
    ]
});

/// The customer inquiry form: contact details, reply preferences and the
/// inquiry itself. Built on first use and shared for the process lifetime.
pub fn inquiry_form() -> &'static [FieldDescriptor] {
    &INQUIRY_FORM
}
