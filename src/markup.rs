// Copyright 2026 the Pathloop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal forward-only scanner for the markup surrounding path data.
//!
//! This is not an XML parser. It finds tags by scanning for `<` and `>`,
//! hands back the text between the tag name and the `>` unparsed, and can
//! split that text into `name="value"` attributes. There is no tree, no
//! entity decoding and no backtracking; every scan is bounded by the
//! remaining input and fails with a typed error when the input runs out.

use alloc::format;

use crate::{Error, Result};

/// One tag found by a [`Scanner`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field<'a> {
    /// The tag name, without the `/` of a closing tag.
    pub tag: &'a str,
    /// Everything between the tag name and the terminating `>`.
    pub content: &'a str,
    /// Whether this is a closing tag such as `</g>`.
    pub is_closing: bool,
    /// Byte offset of `content` in the scanned document.
    pub offset: usize,
}

/// One `name="value"` pair from a tag's content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attribute<'a> {
    /// The attribute name.
    pub name: &'a str,
    /// The text between the quotes.
    pub value: &'a str,
}

/// Scans a document for tags, front to back.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Start scanning at the beginning of `src`.
    pub fn new(src: &'a str) -> Self {
        Scanner { src, pos: 0 }
    }

    /// The unscanned remainder of the document.
    pub fn remaining(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// Scan to the next tag and consume it.
    ///
    /// Returns `Ok(None)` once no `<` is left.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedMarkup`] if a tag is opened but the input
    /// ends before its `>`.
    pub fn next_field(&mut self) -> Result<Option<Field<'a>>> {
        let Some(lt) = self.remaining().find('<') else {
            self.pos = self.src.len();
            return Ok(None);
        };
        let start = self.pos + lt;
        let body = &self.src[start + 1..];
        let Some(gt) = body.find('>') else {
            self.pos = self.src.len();
            return Err(Error::MalformedMarkup {
                offset: start,
                expected: '>',
            });
        };
        self.pos = start + 1 + gt + 1;

        let inner = &body[..gt];
        let (is_closing, inner, skipped) = match inner.strip_prefix('/') {
            Some(rest) => (true, rest, 1),
            None => (false, inner, 0),
        };
        let name_end = inner
            .find(|c: char| c.is_ascii_whitespace() || c == '/')
            .unwrap_or(inner.len());
        let field = Field {
            tag: &inner[..name_end],
            content: &inner[name_end..],
            is_closing,
            offset: start + 1 + skipped + name_end,
        };
        log::trace!("tag <{}{}>", if is_closing { "/" } else { "" }, field.tag);
        Ok(Some(field))
    }

    /// Consume tags until an opening tag named `name` is found.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the document ends first, or
    /// [`Error::MalformedMarkup`] if a tag on the way is unterminated.
    pub fn find_tag(&mut self, name: &str) -> Result<Field<'a>> {
        while let Some(field) = self.next_field()? {
            if !field.is_closing && field.tag == name {
                return Ok(field);
            }
        }
        Err(Error::NotFound(format!("tag <{name}>")))
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Field<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_field().transpose()
    }
}

impl<'a> Field<'a> {
    /// Scan the attributes of this tag.
    pub fn attributes(&self) -> Attributes<'a> {
        Attributes {
            src: self.content,
            pos: 0,
            base: self.offset,
        }
    }

    /// Find the value of the attribute called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the tag has no such attribute, or
    /// [`Error::MalformedMarkup`] if an attribute before it is malformed.
    pub fn attribute(&self, name: &str) -> Result<&'a str> {
        let mut attrs = self.attributes();
        while let Some(attr) = attrs.next_attribute()? {
            if attr.name == name {
                return Ok(attr.value);
            }
        }
        Err(Error::NotFound(format!(
            "attribute `{name}` on <{}>",
            self.tag
        )))
    }
}

/// Scans the content of a tag for `name="value"` pairs.
#[derive(Clone, Debug)]
pub struct Attributes<'a> {
    src: &'a str,
    pos: usize,
    base: usize,
}

impl<'a> Attributes<'a> {
    fn skip_ws(&mut self) {
        let rest = &self.src[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn fail(&mut self, offset: usize, expected: char) -> Error {
        self.pos = self.src.len();
        Error::MalformedMarkup {
            offset: self.base + offset,
            expected,
        }
    }

    /// Consume the next attribute.
    ///
    /// Returns `Ok(None)` when only whitespace, or the `/` of a
    /// self-closing tag, is left.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedMarkup`] if the content ends before the
    /// `=` or either quote of an attribute.
    pub fn next_attribute(&mut self) -> Result<Option<Attribute<'a>>> {
        self.skip_ws();
        let start = self.pos;
        let rest = &self.src[start..];
        if rest.is_empty() || rest == "/" {
            self.pos = self.src.len();
            return Ok(None);
        }
        let Some(eq) = rest.find('=') else {
            return Err(self.fail(start, '='));
        };
        let name = rest[..eq].trim_end();
        self.pos = start + eq + 1;
        self.skip_ws();
        let open = self.pos;
        if !self.src[open..].starts_with('"') {
            return Err(self.fail(open, '"'));
        }
        let Some(len) = self.src[open + 1..].find('"') else {
            return Err(self.fail(open, '"'));
        };
        let value = &self.src[open + 1..open + 1 + len];
        self.pos = open + 1 + len + 1;
        Ok(Some(Attribute { name, value }))
    }
}

impl<'a> Iterator for Attributes<'a> {
    type Item = Result<Attribute<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_attribute().transpose()
    }
}

/// Locate the path data of a document.
///
/// Scans for the root `svg` tag, then a `g` group, then a `path` tag, and
/// returns the value of that tag's `d` attribute.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if any of the tags or the attribute is
/// missing, and [`Error::MalformedMarkup`] if the input ends inside a tag
/// or an attribute.
pub fn find_path_data(text: &str) -> Result<&str> {
    let mut scanner = Scanner::new(text);
    scanner.find_tag("svg")?;
    scanner.find_tag("g")?;
    let path = scanner.find_tag("path")?;
    let data = path.attribute("d")?;
    log::debug!("found path data ({} bytes) at byte {}", data.len(), path.offset);
    Ok(data)
}
