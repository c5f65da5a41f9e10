//! Hero section component

use leptos::*;

/// A feature callout under the title.
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static FEATURES: [Feature; 3] = [
    Feature {
        icon: "📄",
        title: "Digital Organization",
        description: "Store and categorize all your receipts in one secure digital location",
    },
    Feature {
        icon: "⚡",
        title: "Instant Search",
        description: "Find any receipt in seconds using ID, date, or transaction details",
    },
    Feature {
        icon: "🛡️",
        title: "Secure Storage",
        description: "Your financial records are protected with enterprise-grade security",
    },
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Receipt Management"</h1>
            <p class="subtitle">
                "Organize, track, and manage your receipts with ease. "
                "Find any transaction instantly with our powerful search."
            </p>
            <div class="features">
                {FEATURES.iter().map(|feature| view! { <FeatureCard feature=feature/> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn FeatureCard(feature: &'static Feature) -> impl IntoView {
    view! {
        <div class="feature">
            <div class="feature-icon">{feature.icon}</div>
            <h3>{feature.title}</h3>
            <p>{feature.description}</p>
        </div>
    }
}
