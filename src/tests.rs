use crate::format::{Category, ClassMap, Highlighter, classify, highlight, segment};
use crate::lexer::{Kind, Lexer, Token};

const WRAP_OPEN: &str = "<pre><code class=\"golang\">";
const WRAP_CLOSE: &str = "</code></pre>";

/// Helper: drop every tag, then decode the entities the renderer emits.
fn strip_markup(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&#34;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Helper: the markup between the outer wrapper tags.
fn inner(html: &str) -> &str {
    html.strip_prefix(WRAP_OPEN)
        .and_then(|s| s.strip_suffix(WRAP_CLOSE))
        .expect("missing code wrapper")
}

fn kw_id() -> Highlighter {
    Highlighter::new(
        ClassMap::none()
            .with(Category::Keyword, "kw")
            .with(Category::Identifier, "id"),
    )
}

const HELLO: &str = r#"// Command hello greets.
package main

import "fmt"

/* entry point */
func main() {
	msg := "<b>hi</b> & 'bye'"
	if len(msg) > 0 && msg[0] != '\'' {
		fmt.Println(msg, 0x1F, 3.5e-2, 2i)
	}
}
"#;

// ── Concrete scenarios ───────────────────────────────────────────

#[test]
fn package_main_with_kw_and_id() {
    let out = kw_id().highlight("package main").unwrap();
    assert_eq!(
        inner(&out),
        "<span class=\"kw\">package</span> <span class=\"id\">main</span>"
    );
}

#[test]
fn empty_input_is_empty_wrapper() {
    let out = kw_id().highlight("").unwrap();
    assert_eq!(out, format!("{WRAP_OPEN}{WRAP_CLOSE}"));
}

#[test]
fn leading_whitespace_is_unclassed() {
    let out = kw_id().highlight("  x").unwrap();
    assert_eq!(inner(&out), "  <span class=\"id\">x</span>");

    let mut segs = segment("  x", &Lexer::new("  x").tokenize());
    classify(&mut segs);
    assert_eq!(segs[0].text, "  ");
    assert_eq!(segs[0].category, None);
    assert_eq!(segs[1].category, Some(Category::Identifier));
}

#[test]
fn inserted_separator_is_bare() {
    let src = "x\ny";
    let mut segs = segment(src, &Lexer::new(src).tokenize());
    classify(&mut segs);
    assert_eq!(segs[1].text, "\n");
    assert_eq!(segs[1].kind, Some(Kind::Semicolon { inserted: true }));
    assert_eq!(segs[1].category, None);

    let all_ops = Highlighter::new(ClassMap::none().with(Category::Operator, "op"));
    let out = all_ops.highlight(src).unwrap();
    assert_eq!(inner(&out), "x\ny");
    assert!(!out.contains(';'));
}

#[test]
fn explicit_semicolon_is_an_operator() {
    let all_ops = Highlighter::new(ClassMap::none().with(Category::Operator, "op"));
    let out = all_ops.highlight("x; y").unwrap();
    assert_eq!(inner(&out), "x<span class=\"op\">;</span> y");
}

#[test]
fn same_offset_tokens_collapse_to_first() {
    let src = "var x";
    let tokens = [
        Token::new(0, 3, Kind::Var),
        Token::new(0, 3, Kind::Ident),
        Token::new(4, 1, Kind::Ident),
        Token::new(5, 0, Kind::Eof),
    ];
    let segs = segment(src, &tokens);
    assert_eq!(segs.iter().filter(|s| s.start == 0).count(), 1);
    let out = kw_id().highlight_tokens(src, &tokens).unwrap();
    assert_eq!(inner(&out), "<span class=\"kw\">var</span> <span class=\"id\">x</span>");
}

#[test]
fn oversized_external_token_degrades_gracefully() {
    let tokens = [Token::new(1, usize::MAX, Kind::Ident), Token::new(3, 0, Kind::Eof)];
    let out = kw_id().highlight_tokens("abc", &tokens).unwrap();
    assert_eq!(inner(&out), "a<span class=\"id\">bc</span>");
}

// ── Properties on a realistic program ────────────────────────────

#[test]
fn round_trip_reconstructs_source() {
    let out = highlight(HELLO).unwrap();
    assert_eq!(strip_markup(&out), HELLO);
}

#[test]
fn no_raw_specials_inside_wrapper() {
    let out = Highlighter::new(ClassMap::none()).highlight(HELLO).unwrap();
    let body = inner(&out);
    for ch in ['<', '>', '"', '\''] {
        assert!(!body.contains(ch), "unescaped {ch:?} in {body}");
    }
    assert!(body.replace("&amp;", "").replace("&lt;", "").replace("&gt;", "")
        .replace("&#34;", "").replace("&#39;", "").find('&').is_none());
}

#[test]
fn deterministic_output() {
    let hl = Highlighter::default();
    assert_eq!(hl.highlight(HELLO).unwrap(), hl.highlight(HELLO).unwrap());
}

#[test]
fn every_category_shows_up() {
    let out = highlight(HELLO).unwrap();
    assert!(out.contains("<span class=\"comment\">// Command hello greets.</span>"));
    assert!(out.contains("<span class=\"comment\">/* entry point */</span>"));
    assert!(out.contains("<span class=\"keyword\">func</span>"));
    assert!(out.contains("<span class=\"ident\">Println</span>"));
    assert!(out.contains("<span class=\"literal\">&#34;&lt;b&gt;hi&lt;/b&gt; &amp; &#39;bye&#39;&#34;</span>"));
    assert!(out.contains("<span class=\"literal\">0x1F</span>"));
    assert!(out.contains("<span class=\"literal\">3.5e-2</span>"));
    assert!(out.contains("<span class=\"literal\">2i</span>"));
    assert!(out.contains("<span class=\"literal\">&#39;\\&#39;&#39;</span>"));
    assert!(out.contains("<span class=\"operator\">&amp;&amp;</span>"));
    assert!(out.contains("<span class=\"operator\">:=</span>"));
}

#[test]
fn illegal_characters_degrade_to_bare_text() {
    let out = highlight("x @ y").unwrap();
    assert_eq!(inner(&out), "<span class=\"ident\">x</span> @ <span class=\"ident\">y</span>");
}

#[test]
fn unterminated_constructs_still_cover_source() {
    for src in ["\"open", "`raw\nstill", "/* never closed", "'x", "x := \"a\nb\""] {
        let out = highlight(src).unwrap();
        assert_eq!(strip_markup(&out), src);
    }
}

#[test]
fn bom_and_crlf_survive() {
    let src = "\u{FEFF}package p\r\n\r\nvar x = 1\r\n";
    let out = highlight(src).unwrap();
    assert!(out.starts_with("<pre><code class=\"golang\">\u{FEFF}<span class=\"keyword\">package</span>"));
    assert_eq!(strip_markup(&out), src);
}

// ── Configuration ────────────────────────────────────────────────

#[test]
fn distinct_themes_side_by_side() {
    let a = Highlighter::default();
    let b = Highlighter::new(ClassMap::default().with(Category::Keyword, "k"));
    let src = "func f() {}";
    assert!(a.highlight(src).unwrap().contains("class=\"keyword\""));
    assert!(b.highlight(src).unwrap().contains("class=\"k\""));
    assert_eq!(a.classes().class(Category::Keyword), "keyword");
}

#[test]
fn concurrent_calls_share_one_highlighter() {
    let hl = Highlighter::default();
    let expected = hl.highlight(HELLO).unwrap();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| hl.highlight(HELLO).unwrap())).collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}
