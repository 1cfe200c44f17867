//! Lightweight built-in panels without a crate of their own.

use leptos::ev::MouseEvent;
use leptos::*;
use phone_app_contract::{AppMountContext, AppMountFn};
use system_ui::{
    Avatar, Button, ButtonSize, ButtonVariant, EmptyState, IconName, ListRow, ListSurface,
    PanelHeader, Text, TextArea, TextTone,
};

use crate::{
    clock::{format_clock_date, format_clock_time, month_grid, weekday_labels},
    runtime_context::use_phone_runtime,
};

const DIAL_KEYS: [&str; 12] = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "*", "0", "#"];
const DIAL_MAX_DIGITS: usize = 15;
const CALCULATOR_KEYS: [&str; 20] = [
    "AC", "±", "%", "÷", "7", "8", "9", "×", "4", "5", "6", "−", "1", "2", "3", "+", "0", "00",
    ".", "=",
];

const INBOX: [(&str, &str, &str); 4] = [
    ("WebOS チーム", "ようこそ WebOS へ", "09:12"),
    ("カレンダー", "明日の予定: 10:00 定例ミーティング", "昨日"),
    ("フォトサービス", "新しい写真がバックアップされました", "月曜日"),
    ("ニュースレター", "今週のおすすめアプリ", "10/12"),
];

const NO_AVATAR: Option<String> = None;

const CONTACTS: [(&str, &str); 5] = [
    ("青木 葵", "090-1234-5678"),
    ("佐藤 健", "080-2345-6789"),
    ("鈴木 花子", "070-3456-7890"),
    ("田中 太郎", "090-4567-8901"),
    ("山本 さくら", "080-5678-9012"),
];

/// Mount function for a built-in placeholder panel.
pub(super) fn mount_fn(app_id: &str) -> Option<AppMountFn> {
    let mount_fn: AppMountFn = match app_id {
        "clock" => |context: AppMountContext| view! { <ClockPanel context /> }.into_view(),
        "phone" => |context: AppMountContext| view! { <DialerPanel context /> }.into_view(),
        "mail" => |context: AppMountContext| view! { <MailPanel context /> }.into_view(),
        "calendar" => |context: AppMountContext| view! { <CalendarPanel context /> }.into_view(),
        "map" => |context: AppMountContext| view! { <MapPanel context /> }.into_view(),
        "calculator" => |context: AppMountContext| view! { <CalculatorPanel context /> }.into_view(),
        "contacts" => |context: AppMountContext| view! { <ContactsPanel context /> }.into_view(),
        "notes" => |context: AppMountContext| view! { <NotesPanel context /> }.into_view(),
        _ => return None,
    };
    Some(mount_fn)
}

fn close_callback(context: &AppMountContext) -> Callback<MouseEvent> {
    let navigation = context.services.navigation.clone();
    Callback::new(move |_| navigation.close())
}

/// Appends a dial-pad key, ignoring input past the display limit.
fn push_dial_key(digits: &mut String, key: &str) {
    if digits.chars().count() < DIAL_MAX_DIGITS {
        digits.push_str(key);
    }
}

#[component]
fn ClockPanel(context: AppMountContext) -> impl IntoView {
    let clock = use_phone_runtime().clock;
    view! {
        <div class="app app-clock">
            <PanelHeader title=context.display_name.clone() on_back=close_callback(&context) />
            <div class="app-clock-face">
                <p data-ui-slot="time">{move || format_clock_time(clock.get())}</p>
                <p data-ui-slot="date">{move || format_clock_date(clock.get())}</p>
            </div>
        </div>
    }
}

#[component]
fn DialerPanel(context: AppMountContext) -> impl IntoView {
    let digits = create_rw_signal(String::new());
    view! {
        <div class="app app-dialer">
            <PanelHeader title=context.display_name.clone() on_back=close_callback(&context) />
            <output class="app-dialer-display" aria-live="polite">{move || digits.get()}</output>
            <div class="app-keypad">
                {DIAL_KEYS
                    .into_iter()
                    .map(|key| view! {
                        <Button
                            size=ButtonSize::Lg
                            on_click=Callback::new(move |_| digits.update(|digits| push_dial_key(digits, key)))
                        >
                            {key}
                        </Button>
                    })
                    .collect_view()}
            </div>
            <div class="app-dialer-actions">
                <Button
                    variant=ButtonVariant::Primary
                    leading_icon=IconName::Phone
                    disabled=Signal::derive(move || digits.with(String::is_empty))
                >
                    "発信"
                </Button>
                <Button
                    variant=ButtonVariant::Quiet
                    aria_label="削除"
                    on_click=Callback::new(move |_| digits.update(|digits| {
                        digits.pop();
                    }))
                >
                    "⌫"
                </Button>
            </div>
        </div>
    }
}

#[component]
fn MailPanel(context: AppMountContext) -> impl IntoView {
    view! {
        <div class="app app-mail">
            <PanelHeader title=context.display_name.clone() on_back=close_callback(&context) />
            <ListSurface heading="受信トレイ">
                {INBOX
                    .into_iter()
                    .map(|(sender, subject, received)| view! {
                        <ListRow title=sender icon=IconName::Mail detail=subject>
                            <Text tone=TextTone::Secondary>{received}</Text>
                        </ListRow>
                    })
                    .collect_view()}
            </ListSurface>
        </div>
    }
}

#[component]
fn CalendarPanel(context: AppMountContext) -> impl IntoView {
    let clock = use_phone_runtime().clock;
    view! {
        <div class="app app-calendar">
            <PanelHeader title=context.display_name.clone() on_back=close_callback(&context) />
            <h2 class="app-calendar-month">
                {move || clock.with(|now| format!("{}年{}月", now.year, now.month))}
            </h2>
            <div class="app-calendar-grid" role="grid">
                {weekday_labels()
                    .into_iter()
                    .map(|label| view! { <span data-ui-slot="weekday">{label}</span> })
                    .collect_view()}
                {move || {
                    let now = clock.get();
                    month_grid(now)
                        .into_iter()
                        .map(|cell| match cell {
                            Some(day) => view! {
                                <span
                                    data-ui-slot="day"
                                    data-ui-selected=(day == now.day).to_string()
                                >
                                    {day}
                                </span>
                            }
                            .into_view(),
                            None => view! { <span data-ui-slot="blank"></span> }.into_view(),
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn MapPanel(context: AppMountContext) -> impl IntoView {
    view! {
        <div class="app app-map">
            <PanelHeader title=context.display_name.clone() on_back=close_callback(&context) />
            <EmptyState icon=IconName::Map message="地図データはこのプロトタイプでは利用できません" />
        </div>
    }
}

#[component]
fn CalculatorPanel(context: AppMountContext) -> impl IntoView {
    view! {
        <div class="app app-calculator">
            <PanelHeader title=context.display_name.clone() on_back=close_callback(&context) />
            <output class="app-calculator-display">"0"</output>
            <div class="app-keypad" data-columns="4">
                {CALCULATOR_KEYS
                    .into_iter()
                    .map(|key| view! { <Button size=ButtonSize::Lg>{key}</Button> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ContactsPanel(context: AppMountContext) -> impl IntoView {
    view! {
        <div class="app app-contacts">
            <PanelHeader title=context.display_name.clone() on_back=close_callback(&context) />
            <ListSurface>
                {CONTACTS
                    .into_iter()
                    .map(|(name, number)| view! {
                        <ListRow title=name detail=number>
                            <Avatar image_url=NO_AVATAR fallback=IconName::Person />
                        </ListRow>
                    })
                    .collect_view()}
            </ListSurface>
        </div>
    }
}

#[component]
fn NotesPanel(context: AppMountContext) -> impl IntoView {
    let text = create_rw_signal(String::new());
    view! {
        <div class="app app-notes">
            <PanelHeader title=context.display_name.clone() on_back=close_callback(&context) />
            <TextArea
                aria_label="メモ"
                placeholder="メモを入力..."
                value=text
                on_input=Callback::new(move |value: String| text.set(value))
            />
            <Text tone=TextTone::Secondary>
                {move || format!("{}文字", text.with(|text| text.chars().count()))}
            </Text>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_builtin_placeholder_has_a_mount_fn() {
        for app_id in [
            "clock",
            "phone",
            "mail",
            "calendar",
            "map",
            "calculator",
            "contacts",
            "notes",
        ] {
            assert!(mount_fn(app_id).is_some(), "{app_id}");
        }
        assert!(mount_fn("camera").is_none());
    }

    #[test]
    fn dial_display_caps_digit_count() {
        let mut digits = String::new();
        for _ in 0..20 {
            push_dial_key(&mut digits, "9");
        }
        assert_eq!(digits.len(), DIAL_MAX_DIGITS);
        push_dial_key(&mut digits, "#");
        assert_eq!(digits, "9".repeat(DIAL_MAX_DIGITS));
    }
}
