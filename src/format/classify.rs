use super::segment::Segment;
use super::theme::Category;
use crate::lexer::Kind;

/// Map a token kind to its visual category. Kinds with no category
/// (illegal characters, `Eof`) return `None` rather than failing.
#[must_use]
pub fn kind_category(kind: Kind) -> Option<Category> {
    match kind {
        Kind::Comment => Some(Category::Comment),
        Kind::Ident => Some(Category::Identifier),
        Kind::Semicolon { inserted: true } => None,
        Kind::Illegal | Kind::Eof => None,
        k if k.is_keyword() => Some(Category::Keyword),
        k if k.is_literal() => Some(Category::Literal),
        k if k.is_operator() => Some(Category::Operator),
        _ => None,
    }
}

/// Category of one segment. A separator only counts as an operator when its
/// text really starts with `;`; one synthesized at a line break stays bare.
#[must_use]
pub fn segment_category(segment: &Segment<'_>) -> Option<Category> {
    let kind = segment.kind?;
    if matches!(kind, Kind::Semicolon { .. }) && !segment.text.starts_with(';') {
        return None;
    }
    kind_category(kind)
}

/// Fill in every segment's category in place.
pub fn classify(segments: &mut [Segment<'_>]) {
    for segment in segments.iter_mut() {
        segment.category = segment_category(segment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_table() {
        assert_eq!(kind_category(Kind::Func), Some(Category::Keyword));
        assert_eq!(kind_category(Kind::Ident), Some(Category::Identifier));
        assert_eq!(kind_category(Kind::String), Some(Category::Literal));
        assert_eq!(kind_category(Kind::Char), Some(Category::Literal));
        assert_eq!(kind_category(Kind::Imag), Some(Category::Literal));
        assert_eq!(kind_category(Kind::AndNotAssign), Some(Category::Operator));
        assert_eq!(kind_category(Kind::LBrace), Some(Category::Operator));
        assert_eq!(kind_category(Kind::Comment), Some(Category::Comment));
    }

    #[test]
    fn unknown_kinds_degrade_to_none() {
        assert_eq!(kind_category(Kind::Illegal), None);
        assert_eq!(kind_category(Kind::Eof), None);
    }

    #[test]
    fn explicit_semicolon_is_an_operator() {
        let seg = Segment::new(1, ";", Some(Kind::Semicolon { inserted: false }));
        assert_eq!(segment_category(&seg), Some(Category::Operator));
    }

    #[test]
    fn inserted_separator_is_bare() {
        let seg = Segment::new(1, "\n", Some(Kind::Semicolon { inserted: true }));
        assert_eq!(segment_category(&seg), None);
    }

    #[test]
    fn separator_without_glyph_is_bare_even_if_not_flagged() {
        let seg = Segment::new(1, "\n", Some(Kind::Semicolon { inserted: false }));
        assert_eq!(segment_category(&seg), None);
    }

    #[test]
    fn kindless_segments_stay_none() {
        let mut segs = vec![Segment::new(0, "  ", None), Segment::new(2, "x", Some(Kind::Ident))];
        classify(&mut segs);
        assert_eq!(segs[0].category, None);
        assert_eq!(segs[1].category, Some(Category::Identifier));
    }
}
