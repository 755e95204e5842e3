//! Built-in "AI Agents Overview" deck.

use crate::types::{Deck, LineSpec, SlideSpec};
use std::path::PathBuf;

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "AI_Agents_Overview.pptx";

/// Directory holding the slide images, relative to the asset root.
pub const IMAGE_DIR: &str = "autowais/public/images/blog";

fn image(name: &str) -> PathBuf {
    PathBuf::from(IMAGE_DIR).join(name)
}

fn slide(title: &str, image_name: &str, lines: &[(&str, bool, bool)]) -> SlideSpec {
    SlideSpec {
        title: title.to_string(),
        image_path: Some(image(image_name)),
        lines: lines
            .iter()
            .map(|&(text, is_header, is_highlight)| LineSpec::new(text, is_header, is_highlight))
            .collect(),
    }
}

/// The three-slide introduction to AI agents.
pub fn ai_agents_overview() -> Deck {
    Deck::new(vec![
        slide(
            "What Are AI Agents? 🤖",
            "ai-automation.png",
            &[
                ("Key Differences from Regular AI:", true, false),
                ("Regular AI (ChatGPT):", true, false),
                ("You ask → It answers", false, false),
                ("Passive conversation", false, false),
                ("One response at a time", false, false),
                ("AI Agents:", true, false),
                ("You give a goal → It figures out how", false, false),
                ("Active problem-solving", false, false),
                ("Multiple actions until goal achieved", false, false),
                ("", false, false),
                ("Simple Analogy:", true, false),
                ("Regular AI = Smart encyclopedia that answers questions", false, false),
                ("AI Agent = Capable employee who handles entire projects", false, false),
                ("", false, false),
                ("The Magic Word: AUTONOMOUS", true, false),
                (
                    "They can think, decide, act, and learn - all without constant human input!",
                    false,
                    false,
                ),
            ],
        ),
        slide(
            "How They Work & Examples You Know 🔄",
            "workflow-automation.png",
            &[
                ("The 4-Step Cycle:", true, false),
                ("👁️ PERCEIVE - Gather information from environment", false, false),
                ("🧠 THINK - Analyze and plan actions", false, false),
                ("🤖 ACT - Take real-world actions", false, false),
                ("📚 LEARN - Improve from results", false, false),
                ("", false, false),
                ("This cycle repeats until the goal is achieved", false, false),
                ("", false, false),
                ("You Already Use AI Agents:", true, false),
                ("🗺️ Google Maps/Waze: Monitors traffic, reroutes, learns patterns", false, false),
                ("🏠 Smart Home Systems: Learns routines, adjusts automatically", false, false),
                (
                    "🎵 Netflix/Spotify: Analyzes preferences, suggests content, improves over time",
                    false,
                    false,
                ),
            ],
        ),
        slide(
            "Why This Matters & What's Next 🚀",
            "remote-work-tools.png",
            &[
                ("Benefits for You:", true, false),
                ("✅ Save Time - Handle routine tasks automatically", false, false),
                ("✅ Never Forget - Continuous monitoring and reminders", false, false),
                ("✅ Work 24/7 - No breaks needed", false, false),
                ("✅ Personalized - Adapt to your preferences", false, false),
                ("✅ Cost Effective - Cheaper than human help", false, false),
                ("", false, false),
                ("Coming Soon:", true, false),
                ("Personal AI Assistants for your digital life", false, false),
                ("Business Automation for complex workflows", false, false),
                ("Smart Cities optimizing services", false, false),
                ("Healthcare Companions monitoring health", false, false),
                ("", false, false),
                ("Key Takeaway:", true, true),
                (
                    "AI Agents aren't replacing human intelligence - they're amplifying it.",
                    false,
                    true,
                ),
                (
                    "They handle routine tasks so you can focus on what matters most.",
                    false,
                    true,
                ),
                ("", false, false),
                ("The Bottom Line:", true, true),
                (
                    "We're moving from tools that help us work → tools that work for us",
                    false,
                    true,
                ),
            ],
        ),
    ])
}
