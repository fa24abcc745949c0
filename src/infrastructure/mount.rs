// Mount point - attach rendered markup to the anchor element of a host document
use thiserror::Error;

/// Anchor lookup skips comments, doctype/processing instructions and the
/// raw text of `<script>` and `<style>`. Attribute values may be double
/// quoted, single quoted or unquoted, with whitespace around `=`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MountError {
    #[error("mount anchor #{id} not found in host document")]
    AnchorNotFound { id: String },
    #[error("mount anchor #{id} appears {count} times in host document")]
    DuplicateAnchor { id: String, count: usize },
    #[error("mount anchor #{id} is never closed")]
    UnterminatedAnchor { id: String },
}

#[derive(Debug)]
struct Tag {
    start: usize,
    /// Index just past the closing `>`.
    end: usize,
    /// Lowercased tag name.
    name: String,
    closing: bool,
    self_closing: bool,
    attrs: Vec<(String, Option<String>)>,
}

impl Tag {
    fn id(&self) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(name, _)| name == "id")
            .and_then(|(_, value)| value.as_deref())
    }
}

/// Replace the children of the element whose id is `anchor_id` with
/// `content`. The document is left untouched on error.
pub fn mount(document: &str, anchor_id: &str, content: &str) -> Result<String, MountError> {
    let not_found = || MountError::AnchorNotFound {
        id: anchor_id.to_string(),
    };
    if anchor_id.is_empty() {
        return Err(not_found());
    }

    let tags: Vec<Tag> = Tags::new(document).collect();
    let anchors: Vec<usize> = tags
        .iter()
        .enumerate()
        .filter(|(_, t)| !t.closing && t.id() == Some(anchor_id))
        .map(|(i, _)| i)
        .collect();

    let index = match anchors.as_slice() {
        [] => return Err(not_found()),
        [index] => *index,
        many => {
            return Err(MountError::DuplicateAnchor {
                id: anchor_id.to_string(),
                count: many.len(),
            });
        }
    };
    let anchor = &tags[index];

    let mut mounted = String::with_capacity(document.len() + content.len());

    if anchor.self_closing {
        // <div id="root"/> becomes <div id="root">content</div>
        let open = document[anchor.start..anchor.end - 1]
            .trim_end()
            .trim_end_matches('/')
            .trim_end();
        mounted.push_str(&document[..anchor.start]);
        mounted.push_str(open);
        mounted.push('>');
        mounted.push_str(content);
        mounted.push_str("</");
        mounted.push_str(&anchor.name);
        mounted.push('>');
        mounted.push_str(&document[anchor.end..]);
        return Ok(mounted);
    }

    let close = find_close(&tags[index + 1..], &anchor.name).ok_or_else(|| {
        MountError::UnterminatedAnchor {
            id: anchor_id.to_string(),
        }
    })?;

    mounted.push_str(&document[..anchor.end]);
    mounted.push_str(content);
    mounted.push_str(&document[close..]);
    Ok(mounted)
}

/// Start index of the closing tag that balances an opening `name` tag.
fn find_close(following: &[Tag], name: &str) -> Option<usize> {
    let mut depth = 1usize;
    for tag in following.iter().filter(|t| t.name == name) {
        if tag.closing {
            depth -= 1;
            if depth == 0 {
                return Some(tag.start);
            }
        } else if !tag.self_closing {
            depth += 1;
        }
    }
    None
}

/// Iterator over the element tags of an HTML document.
struct Tags<'a> {
    doc: &'a str,
    lower: String,
    pos: usize,
}

impl<'a> Tags<'a> {
    fn new(doc: &'a str) -> Self {
        Self {
            doc,
            lower: doc.to_ascii_lowercase(),
            pos: 0,
        }
    }

    fn skip_past(&mut self, from: usize, marker: &str) {
        self.pos = self.lower[from..]
            .find(marker)
            .map(|i| from + i + marker.len())
            .unwrap_or(self.doc.len());
    }
}

impl Iterator for Tags<'_> {
    type Item = Tag;

    fn next(&mut self) -> Option<Tag> {
        loop {
            let start = self.pos + self.doc[self.pos..].find('<')?;
            let rest = &self.doc[start..];

            if rest.starts_with("<!--") {
                self.skip_past(start + 4, "-->");
                continue;
            }
            if rest.starts_with("<!") || rest.starts_with("<?") {
                self.skip_past(start, ">");
                continue;
            }

            let closing = rest.starts_with("</");
            let name_start = start + if closing { 2 } else { 1 };
            let tail = &self.doc[name_start..];
            if !tail.starts_with(|c: char| c.is_ascii_alphabetic()) {
                self.pos = start + 1;
                continue;
            }
            let name_len = tail
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
                .unwrap_or(tail.len());
            let name = tail[..name_len].to_ascii_lowercase();

            let Some((attrs, end, self_closing)) = parse_attrs(self.doc, name_start + name_len)
            else {
                self.pos = self.doc.len();
                return None;
            };
            self.pos = end;

            if !closing && !self_closing && (name == "script" || name == "style") {
                let raw_end = format!("</{}", name);
                self.pos = self.lower[end..]
                    .find(&raw_end)
                    .map(|i| end + i)
                    .unwrap_or(self.doc.len());
            }

            return Some(Tag {
                start,
                end,
                name,
                closing,
                self_closing,
                attrs,
            });
        }
    }
}

type ParsedAttrs = (Vec<(String, Option<String>)>, usize, bool);

/// Parse attributes from `pos` up to the tag's `>`, honoring quotes.
/// Returns the attributes, the index past `>` and whether the tag ends in `/>`.
fn parse_attrs(doc: &str, mut pos: usize) -> Option<ParsedAttrs> {
    let bytes = doc.as_bytes();
    let skip_ws = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        i
    };

    let mut attrs = Vec::new();
    let mut self_closing = false;

    loop {
        pos = skip_ws(pos);
        match *bytes.get(pos)? {
            b'>' => return Some((attrs, pos + 1, self_closing)),
            b'/' => {
                self_closing = true;
                pos += 1;
                continue;
            }
            _ => self_closing = false,
        }

        let name_start = pos;
        while pos < bytes.len()
            && !bytes[pos].is_ascii_whitespace()
            && !matches!(bytes[pos], b'=' | b'>' | b'/')
        {
            pos += 1;
        }
        if pos == name_start {
            // stray '='
            pos += 1;
            continue;
        }
        let name = doc[name_start..pos].to_ascii_lowercase();

        pos = skip_ws(pos);
        if bytes.get(pos) != Some(&b'=') {
            attrs.push((name, None));
            continue;
        }
        pos = skip_ws(pos + 1);

        let value = match *bytes.get(pos)? {
            quote @ (b'"' | b'\'') => {
                let value_start = pos + 1;
                let value_end = value_start + doc[value_start..].find(quote as char)?;
                pos = value_end + 1;
                &doc[value_start..value_end]
            }
            _ => {
                let value_start = pos;
                while pos < bytes.len() && !bytes[pos].is_ascii_whitespace() && bytes[pos] != b'>'
                {
                    pos += 1;
                }
                &doc[value_start..pos]
            }
        };
        attrs.push((name, Some(value.to_string())));
    }
}
