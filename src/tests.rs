#[cfg(test)]
mod tests {

    mod slug_tests {
        use crate::services::slug::{generate_slug, validate_slug, with_suffix, MAX_SLUG_LENGTH};

        #[test]
        fn test_generate_slug_basic() {
            assert_eq!(generate_slug("Hello World"), "hello-world");
        }

        #[test]
        fn test_generate_slug_trailing_punctuation() {
            assert_eq!(
                generate_slug("The Future of Web Accessibility!"),
                "the-future-of-web-accessibility"
            );
        }

        #[test]
        fn test_generate_slug_special_characters() {
            assert_eq!(generate_slug("Hello, World!"), "hello-world");
            assert_eq!(generate_slug("C++ & Rust: a -- comparison"), "c-rust-a-comparison");
        }

        #[test]
        fn test_generate_slug_unicode() {
            assert_eq!(generate_slug("Café au lait"), "cafe-au-lait");
        }

        #[test]
        fn test_generate_slug_numbers() {
            assert_eq!(generate_slug("WCAG 2.2 Checklist"), "wcag-2-2-checklist");
        }

        #[test]
        fn test_generate_slug_leading_trailing_spaces() {
            assert_eq!(generate_slug("  Hello World  "), "hello-world");
        }

        #[test]
        fn test_generate_slug_only_punctuation_is_empty() {
            assert_eq!(generate_slug("!!!"), "");
        }

        #[test]
        fn test_generate_slug_truncates_to_max_length() {
            let slug = generate_slug(&"a".repeat(150));
            assert_eq!(slug.len(), MAX_SLUG_LENGTH);
        }

        #[test]
        fn test_generate_slug_truncation_drops_dangling_hyphen() {
            let slug = generate_slug(&"word ".repeat(40));
            assert!(slug.len() <= MAX_SLUG_LENGTH);
            assert!(!slug.ends_with('-'));
            assert!(validate_slug(&slug));
        }

        #[test]
        fn test_with_suffix_stays_within_limit() {
            let slug = with_suffix(&"a".repeat(100), "-1700000000");
            assert_eq!(slug.len(), MAX_SLUG_LENGTH);
            assert!(slug.ends_with("-1700000000"));

            assert_eq!(with_suffix("hello", "-42"), "hello-42");
        }

        #[test]
        fn test_validate_slug_valid() {
            assert!(validate_slug("hello-world"));
            assert!(validate_slug("my-blog-post-2024"));
            assert!(validate_slug("a"));
            assert!(validate_slug("123"));
        }

        #[test]
        fn test_validate_slug_invalid() {
            assert!(!validate_slug(""));
            assert!(!validate_slug("Hello-World"));
            assert!(!validate_slug("hello_world"));
            assert!(!validate_slug("hello world"));
            assert!(!validate_slug("-hello"));
            assert!(!validate_slug("hello-"));
            assert!(!validate_slug("hello--world"));
            assert!(!validate_slug(&"a".repeat(101)));
        }
    }

    mod text_tests {
        use crate::services::text::{
            calculate_reading_time, generate_excerpt, sanitize_text, strip_html_tags,
            truncate_at_word,
        };

        #[test]
        fn test_reading_time_empty() {
            assert_eq!(calculate_reading_time(""), 0);
        }

        #[test]
        fn test_reading_time_minimum_one_minute() {
            assert_eq!(calculate_reading_time("Just a few words."), 1);
            assert_eq!(calculate_reading_time("<p></p>"), 1);
        }

        #[test]
        fn test_reading_time_rounds_up() {
            assert_eq!(calculate_reading_time(&"word ".repeat(400)), 2);
            assert_eq!(calculate_reading_time(&"word ".repeat(401)), 3);
            assert_eq!(calculate_reading_time(&"word ".repeat(200)), 1);
        }

        #[test]
        fn test_reading_time_ignores_markup() {
            let content = format!("{}word", "<span></span> ".repeat(300));
            assert_eq!(calculate_reading_time(&content), 1);
        }

        #[test]
        fn test_strip_html_tags() {
            assert_eq!(
                strip_html_tags("<p>Hello <strong>world</strong></p>").split_whitespace().collect::<Vec<_>>(),
                vec!["Hello", "world"]
            );
        }

        #[test]
        fn test_excerpt_short_content_unchanged() {
            assert_eq!(generate_excerpt("<p>Short   text</p>", 300), "Short text");
        }

        #[test]
        fn test_excerpt_cuts_on_word_boundary() {
            assert_eq!(
                generate_excerpt("The quick brown fox jumps over the lazy dog", 20),
                "The quick brown fox..."
            );
        }

        #[test]
        fn test_excerpt_never_exceeds_limit_or_splits_words() {
            let content = "<h2>Intro</h2><p>Accessible design helps every reader, including people using assistive technology every single day.</p>";
            let cleaned = generate_excerpt(content, 10_000);

            for max in 5..cleaned.len() {
                let excerpt = generate_excerpt(content, max);
                let kept = excerpt.strip_suffix("...").unwrap_or(&excerpt);
                assert!(kept.chars().count() <= max, "max {}: {:?}", max, excerpt);
                assert!(cleaned.starts_with(kept));
                let rest = &cleaned[kept.len()..];
                assert!(
                    rest.is_empty() || rest.starts_with(' '),
                    "split mid-word at max {}: {:?}",
                    max,
                    excerpt
                );
            }
        }

        #[test]
        fn test_excerpt_zero_length_uses_default() {
            let content = "word ".repeat(200);
            let excerpt = generate_excerpt(&content, 0);
            assert!(excerpt.ends_with("..."));
            assert!(excerpt.chars().count() <= 303);
        }

        #[test]
        fn test_truncate_exact_boundary_keeps_full_word() {
            assert_eq!(truncate_at_word("hello world again", 11), "hello world...");
        }

        #[test]
        fn test_truncate_single_long_word_is_hard_cut() {
            assert_eq!(truncate_at_word("abcdefghij", 4), "abcd...");
        }

        #[test]
        fn test_truncate_multibyte_text() {
            assert_eq!(truncate_at_word("héllo wörld ünïcode", 13), "héllo wörld...");
        }

        #[test]
        fn test_sanitize_strips_control_characters() {
            assert_eq!(sanitize_text("  hi\u{0007}there\n "), "hithere");
            assert_eq!(sanitize_text("\u{0}x"), "x");
        }

        #[test]
        fn test_sanitize_keeps_whitespace_controls() {
            assert_eq!(sanitize_text("a\tb\r\nc"), "a\tb\r\nc");
        }
    }

    mod pagination_tests {
        use crate::models::ListParams;
        use crate::services::pagination::{
            parse_bool, parse_limit, parse_page, ListQuery, PageMeta,
        };

        fn params(pairs: &[(&str, &str)]) -> ListParams {
            let mut p = ListParams::default();
            for (key, value) in pairs {
                let value = Some(value.to_string());
                match *key {
                    "page" => p.page = value,
                    "limit" => p.limit = value,
                    "search" => p.search = value,
                    "featured" => p.featured = value,
                    "published" => p.published = value,
                    _ => unreachable!(),
                }
            }
            p
        }

        #[test]
        fn test_page_clamps_to_one() {
            assert_eq!(parse_page(None), 1);
            assert_eq!(parse_page(Some("0")), 1);
            assert_eq!(parse_page(Some("-5")), 1);
            assert_eq!(parse_page(Some("abc")), 1);
            assert_eq!(parse_page(Some("")), 1);
            assert_eq!(parse_page(Some("3")), 3);
            assert_eq!(parse_page(Some(" 2 ")), 2);
        }

        #[test]
        fn test_limit_out_of_range_uses_default() {
            for raw in ["0", "-1", "101", "1000", "ten", ""] {
                assert_eq!(parse_limit(Some(raw), 10, 100), 10, "raw {:?}", raw);
            }
            assert_eq!(parse_limit(None, 10, 100), 10);
            assert_eq!(parse_limit(Some("1"), 10, 100), 1);
            assert_eq!(parse_limit(Some("50"), 10, 100), 50);
            assert_eq!(parse_limit(Some("100"), 10, 100), 100);
        }

        #[test]
        fn test_parse_bool_lenient() {
            for raw in ["1", "t", "T", "TRUE", "true", "True"] {
                assert_eq!(parse_bool(raw), Some(true));
            }
            for raw in ["0", "f", "F", "FALSE", "false", "False"] {
                assert_eq!(parse_bool(raw), Some(false));
            }
            assert_eq!(parse_bool("yes"), None);
            assert_eq!(parse_bool(""), None);
        }

        #[test]
        fn test_published_defaults_to_true() {
            assert_eq!(ListQuery::default().filter.published, Some(true));
            let q = ListQuery::from_params(&params(&[("published", "nope")]), 10, 100);
            assert_eq!(q.filter.published, Some(true));
            let q = ListQuery::from_params(&params(&[("published", "false")]), 10, 100);
            assert_eq!(q.filter.published, Some(false));
        }

        #[test]
        fn test_featured_invalid_means_no_filter() {
            let q = ListQuery::from_params(&params(&[("featured", "maybe")]), 10, 100);
            assert_eq!(q.filter.featured, None);
            let q = ListQuery::from_params(&params(&[("featured", "1")]), 10, 100);
            assert_eq!(q.filter.featured, Some(true));
        }

        #[test]
        fn test_search_is_trimmed_and_lowercased() {
            let q = ListQuery::from_params(&params(&[("search", "  Accessibility ")]), 10, 100);
            assert_eq!(q.filter.search.as_deref(), Some("accessibility"));
            let q = ListQuery::from_params(&params(&[("search", "   ")]), 10, 100);
            assert_eq!(q.filter.search, None);
        }

        #[test]
        fn test_offset() {
            let q = ListQuery::from_params(&params(&[("page", "3"), ("limit", "10")]), 10, 100);
            assert_eq!(q.offset(), 20);
            assert_eq!(ListQuery::default().offset(), 0);
        }

        #[test]
        fn test_page_meta_empty() {
            let meta = PageMeta::new(0, 1, 10);
            assert_eq!(meta.total_pages, 0);
            assert!(!meta.has_next);
            assert!(!meta.has_prev);
        }

        #[test]
        fn test_page_meta_examples() {
            assert_eq!(
                PageMeta::new(7, 1, 5),
                PageMeta { total_pages: 2, has_next: true, has_prev: false }
            );
            assert_eq!(
                PageMeta::new(7, 2, 5),
                PageMeta { total_pages: 2, has_next: false, has_prev: true }
            );
            assert_eq!(
                PageMeta::new(5, 4, 10),
                PageMeta { total_pages: 1, has_next: false, has_prev: true }
            );
        }

        #[test]
        fn test_page_meta_consistency() {
            for total in 0..50i64 {
                for limit in 1..12usize {
                    for page in 1..8usize {
                        let meta = PageMeta::new(total, page, limit);
                        let expected = (total as f64 / limit as f64).ceil() as usize;
                        assert_eq!(meta.total_pages, expected);
                        assert_eq!(meta.has_next, page < meta.total_pages);
                        assert_eq!(meta.has_prev, page > 1);
                    }
                }
            }
        }
    }

    mod validation_tests {
        use crate::models::{CreatePost, TagsInput, UpdatePost};
        use crate::services::validation::{prepare_create, prepare_update};

        fn valid_input() -> CreatePost {
            CreatePost {
                title: "  Accessible Forms  ".to_string(),
                content: "Label every input and describe errors clearly.".to_string(),
                author: "Ada".to_string(),
                ..Default::default()
            }
        }

        #[test]
        fn test_valid_create_is_sanitized() {
            let draft = prepare_create(valid_input()).unwrap();
            assert_eq!(draft.title, "Accessible Forms");
            assert_eq!(draft.excerpt, "");
            assert_eq!(draft.tags, "");
        }

        #[test]
        fn test_missing_required_fields() {
            let errors = prepare_create(CreatePost::default()).unwrap_err();
            assert!(errors.has_field("title"));
            assert!(errors.has_field("content"));
            assert!(errors.has_field("author"));
        }

        #[test]
        fn test_whitespace_only_title_is_required() {
            let mut input = valid_input();
            input.title = " \u{0007} ".to_string();
            let errors = prepare_create(input).unwrap_err();
            assert!(errors.has_field("title"));
        }

        #[test]
        fn test_content_minimum_length() {
            let mut input = valid_input();
            input.content = "too short".to_string();
            let errors = prepare_create(input).unwrap_err();
            assert!(errors.has_field("content"));
            assert!(!errors.has_field("title"));
        }

        #[test]
        fn test_length_limits() {
            let mut input = valid_input();
            input.title = "t".repeat(256);
            input.author = "a".repeat(101);
            input.excerpt = Some("e".repeat(501));
            input.meta_title = Some("m".repeat(61));
            input.meta_description = Some("d".repeat(161));
            let errors = prepare_create(input).unwrap_err();
            for field in ["title", "author", "excerpt", "meta_title", "meta_description"] {
                assert!(errors.has_field(field), "missing error for {}", field);
            }
        }

        #[test]
        fn test_limits_are_inclusive() {
            let mut input = valid_input();
            input.title = "t".repeat(255);
            input.author = "a".repeat(100);
            input.excerpt = Some("e".repeat(500));
            input.meta_title = Some("m".repeat(60));
            input.meta_description = Some("d".repeat(160));
            assert!(prepare_create(input).is_ok());
        }

        #[test]
        fn test_tags_are_normalized() {
            let mut input = valid_input();
            input.tags = Some(TagsInput::List(vec![
                "a11y".to_string(),
                " design ".to_string(),
                "".to_string(),
            ]));
            assert_eq!(prepare_create(input).unwrap().tags, "a11y,design");

            let mut input = valid_input();
            input.tags = Some(TagsInput::Joined("rust, web ,, api".to_string()));
            assert_eq!(prepare_create(input).unwrap().tags, "rust,web,api");
        }

        #[test]
        fn test_empty_update_is_valid() {
            let draft = prepare_update(UpdatePost::default()).unwrap();
            assert!(draft.title.is_none());
            assert!(draft.content.is_none());
        }

        #[test]
        fn test_update_distinguishes_empty_from_absent() {
            let input = UpdatePost {
                excerpt: Some(String::new()),
                ..Default::default()
            };
            let draft = prepare_update(input).unwrap();
            assert_eq!(draft.excerpt.as_deref(), Some(""));
            assert!(draft.meta_title.is_none());

            let input = UpdatePost {
                title: Some(String::new()),
                ..Default::default()
            };
            assert!(prepare_update(input).unwrap_err().has_field("title"));
        }
    }

    mod model_tests {
        use crate::models::{split_tags, BlogPost};

        fn sample_post() -> BlogPost {
            BlogPost {
                id: 7,
                title: "Focus Rings".to_string(),
                slug: "focus-rings".to_string(),
                content: "<p>Never remove focus outlines.</p>".to_string(),
                excerpt: "Never remove focus outlines.".to_string(),
                author: "Ada".to_string(),
                published: true,
                featured: false,
                tags: "a11y, css ,focus".to_string(),
                meta_title: "Focus Rings".to_string(),
                meta_description: "Why focus outlines matter.".to_string(),
                reading_time: 1,
                view_count: 3,
                created_at: "2024-01-01T00:00:00.000000Z".to_string(),
                updated_at: "2024-01-01T00:00:00.000000Z".to_string(),
                published_at: Some("2024-01-01T00:00:00.000000Z".to_string()),
            }
        }

        #[test]
        fn test_split_tags_trims_and_skips_empty() {
            assert_eq!(split_tags(" a , b,,c "), vec!["a", "b", "c"]);
            assert!(split_tags("").is_empty());
        }

        #[test]
        fn test_summary_omits_content_and_meta() {
            let value = serde_json::to_value(sample_post().to_summary()).unwrap();
            assert!(value.get("content").is_none());
            assert!(value.get("meta_title").is_none());
            assert!(value.get("meta_description").is_none());
            assert_eq!(value["tags"], serde_json::json!(["a11y", "css", "focus"]));
        }

        #[test]
        fn test_detail_includes_content_and_meta() {
            let value = serde_json::to_value(sample_post().into_detail()).unwrap();
            assert_eq!(value["content"], "<p>Never remove focus outlines.</p>");
            assert_eq!(value["meta_title"], "Focus Rings");
            assert_eq!(value["slug"], "focus-rings");
            assert_eq!(value["view_count"], 3);
        }
    }
}
