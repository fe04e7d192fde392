//! # 固定界面文案
//!
//! 阅读页的工具栏、面包屑和占位提示等固定字符串，按语言手写两份。
//! 登录/注册页只有英文版本，与产品现状一致。

use crate::models::catalog::LocalizedText as T;
use crate::models::display::{AuthStrings, ReaderStrings};
use crate::models::navigation::Locale;
use crate::models::session::AuthMode;

const BREADCRUMB: T = T::new("Dashboard / Reader", "ڈیش بورڈ / مطالعہ");
const PERSONALIZE: T = T::new("Personalize", "ذاتی بنائیں");
const TRANSLATE_TOGGLE: T = T::new("Translate to Urdu", "Translate to English");
const SUMMARY_HEADING: T = T::new("AI Generated Summary", "AI کا تیار کردہ خلاصہ");
const TAKEAWAYS_HEADING: T = T::new("Key Takeaways", "اہم نکات");
const COMPILING_NOTICE: T = T::new(
    "Chapter content is currently being compiled.",
    "باب کا مواد فی الحال مرتب کیا جا رہا ہے۔",
);
const SIMULATION_LOADING: T = T::new(
    "Interactive simulation module loading...",
    "انٹرایکٹو سمولیشن ماڈیول لوڈ ہو رہا ہے...",
);
const SIDEBAR_HEADING: T = T::new("Course Modules", "کورس ماڈیولز");

pub fn reader_strings(locale: Locale) -> ReaderStrings {
    ReaderStrings {
        breadcrumb: BREADCRUMB.get(locale),
        personalize: PERSONALIZE.get(locale),
        translate_toggle: TRANSLATE_TOGGLE.get(locale),
        summary_heading: SUMMARY_HEADING.get(locale),
        takeaways_heading: TAKEAWAYS_HEADING.get(locale),
        compiling_notice: COMPILING_NOTICE.get(locale),
        simulation_loading: SIMULATION_LOADING.get(locale),
        sidebar_heading: SIDEBAR_HEADING.get(locale),
    }
}

/// 注册表单 "Coding Exp" 下拉框的可选值
pub const SOFTWARE_OPTIONS: &[&str] = &["Beginner", "Intermediate", "Advanced"];

/// 注册表单 "Robotics Exp" 下拉框的可选值
pub const HARDWARE_OPTIONS: &[&str] = &["None", "Hobbyist", "Pro"];

pub fn auth_strings(mode: AuthMode) -> AuthStrings {
    match mode {
        AuthMode::Login => AuthStrings {
            heading: "Welcome Back",
            subheading: "Access your dashboard",
            submit_label: "Sign In",
            toggle_prompt: "Don't have an account?",
            toggle_action: "Sign Up",
        },
        AuthMode::Signup => AuthStrings {
            heading: "Join the Lab",
            subheading: "Start your journey into Physical AI",
            submit_label: "Create Account",
            toggle_prompt: "Already have an account?",
            toggle_action: "Log In",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_toggle_names_the_other_locale() {
        assert_eq!(reader_strings(Locale::En).translate_toggle, "Translate to Urdu");
        assert_eq!(reader_strings(Locale::Ur).translate_toggle, "Translate to English");
    }

    #[test]
    fn test_auth_strings_follow_mode() {
        assert_eq!(auth_strings(AuthMode::Login).submit_label, "Sign In");
        assert_eq!(auth_strings(AuthMode::Signup).heading, "Join the Lab");
    }
}
