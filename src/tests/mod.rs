#[cfg(test)]
mod formatting_tests {
    use crate::{
        parse_str, render_document, render_paragraph, Document, OutlineRenderer, Paragraph,
        Render, RenderContext,
    };

    fn intro_document() -> Document {
        parse_str("Intro: This is the start\n  First: sub point one\n  Second: sub point two\n")
            .unwrap()
    }

    fn leaf(header: Option<&str>, body: &str) -> Paragraph {
        Paragraph::new(header.map(str::to_string), body)
    }

    #[test]
    fn test_intro_uppercase_headers() {
        let document = intro_document();
        let context = RenderContext::new().uppercase_headers(true);

        assert_eq!(
            render_document(&document, &context),
            "INTRO. This is the start\n\n1.    FIRST. sub point one\n\n2.    SECOND. sub point two"
        );
    }

    #[test]
    fn test_headers_keep_case_by_default() {
        let document = intro_document();
        let output = OutlineRenderer::default().render(&document);

        assert!(output.starts_with("Intro. This is the start"));
        assert!(output.contains("1.    First. sub point one"));
    }

    #[test]
    fn test_paragraph_without_header() {
        let document = parse_str("Plain text only\n  Nested: item\n").unwrap();
        let output = render_document(&document, &RenderContext::new());

        assert_eq!(output, "Plain text only\n\n1.    Nested. item");
    }

    #[test]
    fn test_four_levels_of_leaders() {
        let input = "\
Agreement: Terms
  Parties: Who
    Buyer: one
      Duty: pay
        Detail: on time
          Deeper: still here
    Seller: two
  Price: How much
";
        let document = parse_str(input).unwrap();
        let lines: Vec<String> = OutlineRenderer::default().lines(&document).collect();

        assert_eq!(
            lines,
            vec![
                "Agreement. Terms",
                "1.    Parties. Who",
                "      a.    Buyer. one",
                "            (1)   Duty. pay",
                "                  (a)   Detail. on time",
                "                              Deeper. still here",
                "      b.    Seller. two",
                "2.    Price. How much",
            ]
        );
    }

    #[test]
    fn test_leaders_align_past_nine() {
        let children: Vec<Paragraph> = (1..=10)
            .map(|n| leaf(None, &format!("item {}", n)))
            .collect();
        let root = leaf(None, "List").with_children(children);

        let lines: Vec<String> = render_paragraph(&root, 0, "", false, false).collect();

        assert_eq!(lines[9], "9.    item 9");
        assert_eq!(lines[10], "10.   item 10");
        assert_eq!(lines[9].find("item"), lines[10].find("item"));
    }

    #[test]
    fn test_render_paragraph_is_restartable() {
        let document = intro_document();
        let root = &document.paragraphs[0];

        let first: Vec<String> = render_paragraph(root, 0, "", true, true).collect();
        let second: Vec<String> = render_paragraph(root, 0, "", true, true).collect();
        let cloned: Vec<String> = {
            let lines = render_paragraph(root, 0, "", true, true);
            let _ = lines.clone().count();
            lines.collect()
        };

        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
        assert_eq!(first, cloned);
    }

    #[test]
    fn test_render_paragraph_is_lazy() {
        let document = intro_document();
        let mut lines = render_paragraph(&document.paragraphs[0], 0, "", false, false);

        assert_eq!(lines.next().as_deref(), Some("Intro. This is the start"));
        assert_eq!(lines.next().as_deref(), Some("1.    First. sub point one"));
        assert_eq!(lines.next().as_deref(), Some("2.    Second. sub point two"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_render_paragraph_with_explicit_leader() {
        let paragraph = leaf(Some("Scope"), "covers everything")
            .with_children(vec![leaf(None, "first"), leaf(None, "second")]);

        let lines: Vec<String> = render_paragraph(&paragraph, 2, "c.    ", false, false).collect();

        assert_eq!(
            lines,
            vec![
                "      c.    Scope. covers everything",
                "            (1)   first",
                "            (2)   second",
            ]
        );
    }

    #[test]
    fn test_emphasized_headers() {
        let document = intro_document();
        let context = RenderContext::new()
            .uppercase_headers(true)
            .emphasize_headers(true);
        let output = render_document(&document, &context);

        assert!(output.starts_with("\x1b[4mINTRO\x1b[0m. This is the start"));
        assert!(output.contains("1.    \x1b[4mFIRST\x1b[0m. sub point one"));
    }

    #[test]
    fn test_empty_document_renders_nothing() {
        let document = parse_str("\n   \n").unwrap();
        assert_eq!(document.render(&RenderContext::new()), "");
    }

    #[test]
    fn test_paragraph_render_trait() {
        let document = intro_document();
        let output = document.paragraphs[0].render(&RenderContext::new().uppercase_headers(true));

        assert_eq!(
            output,
            "INTRO. This is the start\n\n1.    FIRST. sub point one\n\n2.    SECOND. sub point two"
        );
    }

    #[test]
    fn test_roundtrip_preserves_text_and_order() {
        let input = "\
Alpha: one
    Beta: two: with colon
        Gamma
    Delta: four
Epsilon
";
        let document = parse_str(input).unwrap();
        let lines: Vec<String> = OutlineRenderer::default().lines(&document).collect();

        assert_eq!(lines.len(), document.paragraph_count());

        let expected = [
            "Alpha. one",
            "Beta. two: with colon",
            "Gamma",
            "Delta. four",
            "Epsilon",
        ];
        for (line, text) in lines.iter().zip(expected) {
            assert!(line.ends_with(text), "{:?} should end with {:?}", line, text);
        }
    }

    #[test]
    fn test_json_tree_dump() {
        let document = intro_document();
        let value = serde_json::to_value(&document).unwrap();

        assert_eq!(value["indent_unit"], 2);
        assert_eq!(value["paragraphs"][0]["header"], "Intro");
        assert_eq!(value["paragraphs"][0]["children"][1]["body"], "sub point two");
    }
}
