/// A piece of a URL path template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

/// Split a path such as `/users/{id}/posts` into literal and placeholder
/// segments. Scanning starts in literal mode; `{` switches to placeholder
/// mode and `}` back to literal mode. Empty segments are dropped.
pub fn split_url(path: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut in_placeholder = false;
    let mut start = 0;

    for (i, ch) in path.char_indices() {
        if ch != '{' && ch != '}' {
            continue;
        }
        push_segment(&mut segments, &path[start..i], in_placeholder);
        in_placeholder = ch == '{';
        start = i + 1;
    }
    push_segment(&mut segments, &path[start..], in_placeholder);

    segments
}

fn push_segment<'a>(segments: &mut Vec<Segment<'a>>, text: &'a str, placeholder: bool) {
    if text.is_empty() {
        return;
    }
    segments.push(if placeholder {
        Segment::Placeholder(text)
    } else {
        Segment::Literal(text)
    });
}

/// Placeholder names in order of first appearance, without repeats.
pub fn placeholders<'a>(segments: &[Segment<'a>]) -> Vec<&'a str> {
    let mut names: Vec<&str> = Vec::new();
    for segment in segments {
        if let &Segment::Placeholder(name) = segment
            && !names.contains(&name)
        {
            names.push(name);
        }
    }
    names
}
