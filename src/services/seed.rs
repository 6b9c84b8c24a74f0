use super::posts::create_post;
use super::store::PostStore;
use crate::models::{CreatePost, PostFilter, TagsInput};
use anyhow::Result;

struct SamplePost {
    title: &'static str,
    content: &'static str,
    excerpt: &'static str,
    author: &'static str,
    featured: bool,
    tags: &'static str,
    meta_title: &'static str,
    meta_description: &'static str,
}

const SAMPLE_POSTS: &[SamplePost] = &[
    SamplePost {
        title: "The Future of Web Accessibility: AI-Powered Inclusive Design",
        content: "<h2>Introduction</h2><p>Web accessibility matters more every year. AI-powered inclusive design can adapt interfaces to what each reader needs.</p><h2>AI-Driven Accessibility Features</h2><ul><li><strong>Automatic alt text:</strong> image analysis produces descriptions for screen readers.</li><li><strong>Real-time captions:</strong> speech-to-text gives instant captions for video.</li><li><strong>Adaptive UI:</strong> interfaces that adjust to user preferences.</li><li><strong>Voice navigation:</strong> hands-free browsing through natural language.</li></ul><p>The future is bright for inclusive web experiences that serve everyone.</p>",
        excerpt: "Explore how AI-powered technologies are changing web accessibility and creating inclusive digital experiences for all users.",
        author: "Dr. Sarah Chen",
        featured: true,
        tags: "accessibility, AI, inclusive design, web development, WCAG",
        meta_title: "AI-Powered Web Accessibility: Inclusive Design",
        meta_description: "How artificial intelligence is transforming web accessibility with automatic alt text, real-time captions, and adaptive interfaces.",
    },
    SamplePost {
        title: "Mobile-First Accessibility: Designing for Touch and Voice",
        content: "<h2>The Mobile Accessibility Revolution</h2><p>Most readers arrive on a phone, so mobile accessibility comes first.</p><h2>Touch Fundamentals</h2><ul><li><strong>Target size:</strong> at least 44px touch targets.</li><li><strong>Gesture alternatives:</strong> buttons for complex gestures.</li><li><strong>One-handed operation:</strong> thumb-friendly navigation.</li></ul><h2>Testing</h2><ol><li>Screen readers on VoiceOver and TalkBack</li><li>Switch control navigation</li><li>Voice control</li><li>High contrast and zoom</li></ol>",
        excerpt: "Master mobile accessibility design with touch-friendly interfaces, voice commands, and thorough testing strategies.",
        author: "Marcus Rodriguez",
        featured: true,
        tags: "mobile, accessibility, touch, voice, testing",
        meta_title: "Mobile-First Accessibility: Touch and Voice Design",
        meta_description: "A guide to mobile accessibility covering touch targets, gesture alternatives, voice interfaces and testing.",
    },
    SamplePost {
        title: "WCAG 2.2: What Changed and Why It Matters",
        content: "<p>WCAG 2.2 adds nine success criteria focused on cognitive and motor accessibility.</p><h2>Highlights</h2><ul><li>Focus not obscured</li><li>Dragging movements need a single-pointer alternative</li><li>Minimum target size</li><li>Accessible authentication without cognitive tests</li></ul><p>Teams already meeting WCAG 2.1 AA can usually close the gap with a focused audit.</p>",
        excerpt: "",
        author: "Priya Natarajan",
        featured: false,
        tags: "WCAG, standards, compliance",
        meta_title: "WCAG 2.2 Changes Explained",
        meta_description: "The new WCAG 2.2 success criteria and what they mean for teams shipping accessible products.",
    },
    SamplePost {
        title: "Designing High-Contrast Themes That People Actually Use",
        content: "<p>High-contrast modes are often an afterthought. Treat them as a first-class theme instead.</p><h2>Principles</h2><ul><li>Meet a 7:1 contrast ratio for body text</li><li>Never rely on color alone to convey state</li><li>Respect the prefers-contrast media query</li></ul><p>Good contrast helps everyone reading in bright sunlight, too.</p>",
        excerpt: "",
        author: "Jonas Becker",
        featured: false,
        tags: "design, contrast, themes",
        meta_title: "High-Contrast Theme Design",
        meta_description: "Practical guidance for building high-contrast themes that are pleasant to use.",
    },
];

/// Inserts the sample posts when the store holds no posts at all. Returns
/// how many were created.
pub fn seed_if_empty(store: &dyn PostStore, excerpt_length: usize) -> Result<usize> {
    let existing = store.count(&PostFilter::default())?;
    if existing > 0 {
        tracing::info!("Database already contains {} post(s), skipping seed", existing);
        return Ok(0);
    }

    tracing::info!("Seeding database with sample blog posts");
    for sample in SAMPLE_POSTS {
        let input = CreatePost {
            title: sample.title.to_string(),
            content: sample.content.to_string(),
            excerpt: Some(sample.excerpt.to_string()),
            author: sample.author.to_string(),
            published: true,
            featured: sample.featured,
            tags: Some(TagsInput::Joined(sample.tags.to_string())),
            meta_title: Some(sample.meta_title.to_string()),
            meta_description: Some(sample.meta_description.to_string()),
        };
        create_post(store, input, excerpt_length)?;
    }

    Ok(SAMPLE_POSTS.len())
}
