//! ランディングページの文言
//!
//! Web版とCLIの `landing` コマンドで共有する静的コンテンツ

/// ヒーローセクション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hero {
    pub title: &'static str,
    pub tagline: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
}

/// 機能紹介カード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    /// アイコン識別子（Web側でCSSクラスに使う）
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

/// 見出しと説明文
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionCopy {
    pub heading: &'static str,
    pub subheading: &'static str,
}

pub const HERO: Hero = Hero {
    title: "AI Photo Analysis",
    tagline: "Upload any photo and get instant AI-powered insights with advanced analysis and detailed results",
    primary_cta: "Start Analyzing",
    secondary_cta: "Sign In",
};

pub const FEATURES_SECTION: SectionCopy = SectionCopy {
    heading: "Powerful AI Analysis",
    subheading: "Get detailed insights from your photos using cutting-edge AI technology",
};

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: "sparkles",
        title: "Object Detection",
        body: "Identify and classify objects in your images with high accuracy",
    },
    Feature {
        icon: "zap",
        title: "Instant Results",
        body: "Get comprehensive analysis results in seconds, not minutes",
    },
    Feature {
        icon: "shield",
        title: "Secure & Private",
        body: "Your photos are processed securely and never stored permanently",
    },
];

pub const UPLOAD_SECTION: SectionCopy = SectionCopy {
    heading: "Upload & Analyze",
    subheading: "Drop your photo below to get started with AI analysis",
};

pub const UPLOAD_PROMPT: SectionCopy = SectionCopy {
    heading: "Upload Your Photo",
    subheading: "Drag and drop your image here, or click to select",
};

pub const CHOOSE_PHOTO_LABEL: &str = "Choose Photo";

/// アカウント機能は未提供
pub const SIGN_IN_PLACEHOLDER: SectionCopy = SectionCopy {
    heading: "Sign In",
    subheading: "Accounts are not available yet. You can analyze photos without signing in.",
};

pub const FOOTER_NOTE: &str = "Built with Rust, Leptos and WebAssembly.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_titles() {
        let titles: Vec<&str> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(titles, vec!["Object Detection", "Instant Results", "Secure & Private"]);
    }

    #[test]
    fn test_copy_not_empty() {
        assert!(!HERO.title.is_empty());
        assert!(!HERO.tagline.is_empty());
        for f in FEATURES.iter() {
            assert!(!f.icon.is_empty());
            assert!(!f.body.is_empty());
        }
    }
}
