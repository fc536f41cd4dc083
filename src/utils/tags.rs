//! Tag check run over the raw event stream before a document is accepted.
//!
//! serde_yaml resolves every `!!` tag (`tag:yaml.org,2002:*`) itself and keeps
//! no trace of it in the decoded `Value`, so the check has to look at the
//! parser events instead.

use yaml_rust2::parser::{Event, EventReceiver, Parser, Tag};
use yaml_rust2::ScanError;

const CORE_HANDLE: &str = "tag:yaml.org,2002:";
const CORE_TYPES: &[&str] = &["str", "int", "float", "bool", "null", "seq", "map"];

/// First tag outside the core schema, with the document path it sits at.
#[derive(Debug, PartialEq)]
pub struct ForeignTag {
    pub tag: String,
    pub at: String,
}

/// Scan `source` and return the first tag that is not a core scalar or
/// collection tag.
pub fn find_foreign_tag(source: &str) -> Result<Option<ForeignTag>, ScanError> {
    let mut scan = TagScan::default();
    Parser::new_from_str(source).load(&mut scan, true)?;
    Ok(scan.found)
}

fn is_core(tag: &Tag) -> bool {
    match tag.handle.as_str() {
        CORE_HANDLE | "!!" => CORE_TYPES.contains(&tag.suffix.as_str()),
        // `! value`, the non-specific tag, only forces a string.
        "" => tag.suffix == "!",
        "!" => tag.suffix.is_empty(),
        _ => false,
    }
}

fn display_tag(tag: &Tag) -> String {
    if tag.handle == CORE_HANDLE {
        format!("!!{}", tag.suffix)
    } else {
        format!("{}{}", tag.handle, tag.suffix)
    }
}

enum Frame {
    Seq(usize),
    Map { key: Option<String>, in_value: bool },
}

#[derive(Default)]
struct TagScan {
    stack: Vec<Frame>,
    found: Option<ForeignTag>,
}

impl TagScan {
    fn path(&self) -> String {
        let mut at = String::from("$");
        for frame in &self.stack {
            match frame {
                Frame::Seq(i) => at.push_str(&format!("[{i}]")),
                Frame::Map {
                    key: Some(k),
                    in_value: true,
                } => {
                    at.push('.');
                    at.push_str(k);
                }
                Frame::Map { .. } => {}
            }
        }
        at
    }

    fn check(&mut self, tag: Option<Tag>) {
        if self.found.is_some() {
            return;
        }
        if let Some(tag) = tag.filter(|t| !is_core(t)) {
            self.found = Some(ForeignTag {
                tag: display_tag(&tag),
                at: self.path(),
            });
        }
    }

    /// Move the enclosing collection past a finished node.
    fn finish_node(&mut self, scalar: Option<String>) {
        match self.stack.last_mut() {
            Some(Frame::Seq(i)) => *i += 1,
            Some(Frame::Map { key, in_value }) => {
                if *in_value {
                    *key = None;
                    *in_value = false;
                } else {
                    *key = Some(scalar.unwrap_or_else(|| "<key>".to_string()));
                    *in_value = true;
                }
            }
            None => {}
        }
    }
}

impl EventReceiver for TagScan {
    fn on_event(&mut self, ev: Event) {
        match ev {
            Event::Scalar(value, _, _, tag) => {
                self.check(tag);
                self.finish_node(Some(value));
            }
            Event::Alias(_) => self.finish_node(None),
            Event::SequenceStart(_, tag) => {
                self.check(tag);
                self.stack.push(Frame::Seq(0));
            }
            Event::MappingStart(_, tag) => {
                self.check(tag);
                self.stack.push(Frame::Map {
                    key: None,
                    in_value: false,
                });
            }
            Event::SequenceEnd | Event::MappingEnd => {
                self.stack.pop();
                self.finish_node(None);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn foreign(source: &str) -> Option<ForeignTag> {
        find_foreign_tag(source).unwrap()
    }

    #[test]
    fn plain_document_has_no_tags() {
        assert_eq!(foreign("a: 1\nb: [x, y]\nc: {d: e}\n"), None);
    }

    #[test]
    fn core_tags_are_allowed() {
        let doc = "a: !!str 1\nb: !!int 2\nc: !!float 1.5\nd: !!bool true\n\
                   e: !!null ~\nf: !!seq [1]\ng: !!map {x: 1}\n";
        assert_eq!(foreign(doc), None);
    }

    #[test]
    fn python_tag_is_foreign() {
        let found = foreign("payload: !!python/object/apply:os.system [\"echo pwned\"]\n").unwrap();
        assert_eq!(found.tag, "!!python/object/apply:os.system");
        assert_eq!(found.at, "$.payload");
    }

    #[test]
    fn binary_tag_is_foreign() {
        let found = foreign("a: !!binary aGVsbG8=\n").unwrap();
        assert_eq!(found.tag, "!!binary");
    }

    #[test]
    fn local_tag_path_follows_nesting() {
        let found = foreign("model:\n  layers:\n    - dense\n    - !Custom {units: 3}\n").unwrap();
        assert_eq!(found.tag, "!Custom");
        assert_eq!(found.at, "$.model.layers[1]");
    }

    #[test]
    fn path_resets_between_keys() {
        let found = foreign("first: {a: 1}\nsecond: !Odd x\n").unwrap();
        assert_eq!(found.at, "$.second");
    }
}
