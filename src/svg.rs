// Copyright 2026 the Pathloop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG path data.
//!
//! The grammar accepted here is a single closed contour: a leading `M`/`m`,
//! any number of `L H V Q T C S` commands in either case, and a final
//! `Z`/`z`. Absolute and relative coordinates are resolved while parsing, so
//! the resulting [`Path`] only holds absolute points.

use alloc::vec::Vec;
use core::fmt;

use crate::common::Scalar;
use crate::{CubicBez, Error, Line, Path, QuadBez, Result, Segment, Vec2};

impl<T: Scalar> Path<T> {
    /// Parse SVG path data.
    ///
    /// This is the same as [`parse_path`].
    ///
    /// # Errors
    ///
    /// See [`parse_path`].
    pub fn from_svg(data: &str) -> Result<Self> {
        parse_path(data)
    }

    /// Convert the path to an SVG path string representation.
    ///
    /// Only absolute `M`, `L`, `Q`, `C` and `Z` commands are produced, and
    /// coordinates are written with enough digits to parse back to the same
    /// values. No special care is taken to produce a short string.
    pub fn to_svg(&self) -> alloc::string::String {
        alloc::format!("{self}")
    }
}

impl<T: Scalar> fmt::Display for Path<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.start();
        write!(f, "M{},{}", start.x, start.y)?;
        for seg in self.segments() {
            match seg {
                Segment::Line(l) => write!(f, " L{},{}", l.p1.x, l.p1.y)?,
                Segment::Quad(q) => {
                    write!(f, " Q{},{} {},{}", q.p1.x, q.p1.y, q.p2.x, q.p2.y)?;
                }
                Segment::Cubic(c) => write!(
                    f,
                    " C{},{} {},{} {},{}",
                    c.p1.x, c.p1.y, c.p2.x, c.p2.y, c.p3.x, c.p3.y
                )?,
            }
        }
        write!(f, " Z")
    }
}

/// Parse SVG path data into a closed [`Path`].
///
/// Whitespace only separates tokens. Numbers may also be separated by a
/// comma, or by nothing at all when the next one starts with a sign or a
/// second decimal point (`1.5-2.3`, `.5.5`). After a command's arguments,
/// further numbers repeat the command; numbers following a moveto are
/// treated as linetos.
///
/// The smooth commands `T`/`t` and `S`/`s` reflect the last control point
/// through the current point. That is the control point stored by the most
/// recent curve command of either degree; line commands leave it unchanged.
/// Before the first curve, the current point itself is used.
///
/// The closing `Z` draws a line back to the moveto point unless the contour
/// already ends there.
///
/// # Errors
///
/// - [`Error::MalformedPath`] if the data does not start with a moveto, a
///   number is malformed or missing, the closing `Z` is missing or followed
///   by more data, or there are no drawing commands.
/// - [`Error::UnsupportedCommand`] for any other command letter, including
///   the elliptical arc commands `A`/`a`.
/// - [`Error::UnclosedPath`] if relative coordinates overflow, so that the
///   contour can no longer return to its start.
pub fn parse_path<T: Scalar>(data: &str) -> Result<Path<T>> {
    PathParser::new(data).parse()
}

/// Lex a list of numbers, as they appear in path data arguments.
///
/// ```
/// use pathloop::parse_number_list;
///
/// let values: Vec<f64> = parse_number_list("10-20,30 1.5e2").unwrap();
/// assert_eq!(values, [10.0, -20.0, 30.0, 150.0]);
/// ```
///
/// # Errors
///
/// Returns [`Error::MalformedPath`] if anything other than numbers and
/// separators is found.
pub fn parse_number_list<T: Scalar>(data: &str) -> Result<Vec<T>> {
    let mut lexer = SvgLexer::new(data);
    let mut values = Vec::new();
    lexer.skip_ws();
    while !lexer.at_end() {
        values.push(lexer.get_number()?);
        lexer.opt_comma();
    }
    Ok(values)
}

/// A drawing command, without its arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Op {
    Line,
    Horizontal,
    Vertical,
    Quad,
    SmoothQuad,
    Cubic,
    SmoothCubic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Command {
    op: Op,
    relative: bool,
}

impl Command {
    fn from_letter(c: u8) -> Option<Self> {
        let op = match c.to_ascii_lowercase() {
            b'l' => Op::Line,
            b'h' => Op::Horizontal,
            b'v' => Op::Vertical,
            b'q' => Op::Quad,
            b't' => Op::SmoothQuad,
            b'c' => Op::Cubic,
            b's' => Op::SmoothCubic,
            _ => return None,
        };
        Some(Command {
            op,
            relative: c.is_ascii_lowercase(),
        })
    }
}

struct PathParser<'a, T> {
    lexer: SvgLexer<'a>,
    start: Vec2<T>,
    current: Vec2<T>,
    /// The last control point set by a curve command. Lines leave it alone.
    prev_ctrl: Option<Vec2<T>>,
    segments: Vec<Segment<T>>,
}

impl<'a, T: Scalar> PathParser<'a, T> {
    fn new(data: &'a str) -> Self {
        PathParser {
            lexer: SvgLexer::new(data),
            start: Vec2::ZERO,
            current: Vec2::ZERO,
            prev_ctrl: None,
            segments: Vec::new(),
        }
    }

    fn parse(mut self) -> Result<Path<T>> {
        self.lexer.skip_ws();
        match self.lexer.peek() {
            Some(c @ (b'M' | b'm')) => {
                self.lexer.ix += 1;
                let pt = self.lexer.get_point::<T>()?;
                // an initial relative moveto is relative to the origin
                self.start = pt;
                self.current = pt;
                log::trace!("{} -> {}", c as char, pt);
                let implicit = Command {
                    op: Op::Line,
                    relative: c == b'm',
                };
                while self.lexer.at_number()? {
                    self.command(implicit)?;
                }
            }
            Some(_) => return Err(self.lexer.error("path data must begin with a moveto")),
            None => return Err(self.lexer.error("empty path data")),
        }

        loop {
            self.lexer.skip_ws();
            let offset = self.lexer.ix;
            let Some(c) = self.lexer.peek() else {
                return Err(self.lexer.error("missing closing `Z`"));
            };
            match c {
                b'z' | b'Z' => {
                    self.lexer.ix += 1;
                    self.lexer.skip_ws();
                    if !self.lexer.at_end() {
                        return Err(self.lexer.error("unexpected data after closing `Z`"));
                    }
                    if self.segments.is_empty() {
                        return Err(Error::MalformedPath {
                            offset,
                            reason: "contour has no drawing commands",
                        });
                    }
                    // closepath draws a line back to the moveto point
                    if self.current.is_finite() && !self.current.approx_eq(self.start) {
                        let close = Line::new(self.current, self.start);
                        log::trace!("{} -> {:?}", c as char, close);
                        self.segments.push(close.into());
                    }
                    break;
                }
                b'M' | b'm' => {
                    return Err(self
                        .lexer
                        .error("only a single contour is supported, found a second moveto"));
                }
                _ => match Command::from_letter(c) {
                    Some(cmd) => {
                        self.lexer.ix += 1;
                        self.command(cmd)?;
                        while self.lexer.at_number()? {
                            self.command(cmd)?;
                        }
                    }
                    None if c.is_ascii_alphabetic() => {
                        return Err(Error::UnsupportedCommand {
                            command: c as char,
                            offset,
                        });
                    }
                    None => return Err(self.lexer.error("unexpected character")),
                },
            }
        }

        Path::from_segments(self.segments)
    }

    /// Read the arguments of one command and append its segment.
    fn command(&mut self, cmd: Command) -> Result<()> {
        let base = if cmd.relative {
            self.current
        } else {
            Vec2::ZERO
        };
        let seg: Segment<T> = match cmd.op {
            Op::Line => {
                let p = self.lexer.get_point::<T>()? + base;
                self.line_to(p)
            }
            Op::Horizontal => {
                let x = self.lexer.get_number::<T>()? + base.x;
                self.line_to(Vec2::new(x, self.current.y))
            }
            Op::Vertical => {
                let y = self.lexer.get_number::<T>()? + base.y;
                self.line_to(Vec2::new(self.current.x, y))
            }
            Op::Quad => {
                let p1 = self.lexer.get_point::<T>()? + base;
                self.lexer.opt_comma();
                let p2 = self.lexer.get_point::<T>()? + base;
                self.quad_to(p1, p2)
            }
            Op::SmoothQuad => {
                let p1 = self.reflected_ctrl();
                let p2 = self.lexer.get_point::<T>()? + base;
                self.quad_to(p1, p2)
            }
            Op::Cubic => {
                let p1 = self.lexer.get_point::<T>()? + base;
                self.lexer.opt_comma();
                let p2 = self.lexer.get_point::<T>()? + base;
                self.lexer.opt_comma();
                let p3 = self.lexer.get_point::<T>()? + base;
                self.cubic_to(p1, p2, p3)
            }
            Op::SmoothCubic => {
                let p1 = self.reflected_ctrl();
                let p2 = self.lexer.get_point::<T>()? + base;
                self.lexer.opt_comma();
                let p3 = self.lexer.get_point::<T>()? + base;
                self.cubic_to(p1, p2, p3)
            }
        };
        log::trace!("{:?} -> {:?}", cmd, seg);
        self.segments.push(seg);
        Ok(())
    }

    fn line_to(&mut self, p: Vec2<T>) -> Segment<T> {
        let seg = Line::new(self.current, p).into();
        self.current = p;
        seg
    }

    fn quad_to(&mut self, p1: Vec2<T>, p2: Vec2<T>) -> Segment<T> {
        let seg = QuadBez::new(self.current, p1, p2).into();
        self.current = p2;
        self.prev_ctrl = Some(p1);
        seg
    }

    fn cubic_to(&mut self, p1: Vec2<T>, p2: Vec2<T>, p3: Vec2<T>) -> Segment<T> {
        let seg = CubicBez::new(self.current, p1, p2, p3).into();
        self.current = p3;
        self.prev_ctrl = Some(p2);
        seg
    }

    /// The implied control point of a smooth command.
    fn reflected_ctrl(&self) -> Vec2<T> {
        match self.prev_ctrl {
            Some(ctrl) => self.current.reflect(ctrl),
            None => self.current,
        }
    }
}

struct SvgLexer<'a> {
    data: &'a str,
    ix: usize,
}

impl<'a> SvgLexer<'a> {
    fn new(data: &'a str) -> Self {
        SvgLexer { data, ix: 0 }
    }

    fn error(&self, reason: &'static str) -> Error {
        Error::MalformedPath {
            offset: self.ix,
            reason,
        }
    }

    fn at_end(&self) -> bool {
        self.ix >= self.data.len()
    }

    fn peek(&self) -> Option<u8> {
        self.data.as_bytes().get(self.ix).copied()
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if !(c == b' ' || c == 9 || c == 10 || c == 12 || c == 13) {
                break;
            }
            self.ix += 1;
        }
    }

    fn skip_digits(&mut self) -> usize {
        let start = self.ix;
        while let Some(b'0'..=b'9') = self.peek() {
            self.ix += 1;
        }
        self.ix - start
    }

    fn opt_comma(&mut self) {
        self.skip_ws();
        if self.peek() == Some(b',') {
            self.ix += 1;
            self.skip_ws();
        }
    }

    /// Consume a separator and report whether another number follows.
    fn at_number(&mut self) -> Result<bool> {
        self.skip_ws();
        let comma = self.peek() == Some(b',');
        if comma {
            self.ix += 1;
            self.skip_ws();
        }
        let number = matches!(self.peek(), Some(b'0'..=b'9' | b'-' | b'+' | b'.'));
        if comma && !number {
            return Err(self.error("expected a number after `,`"));
        }
        Ok(number)
    }

    fn get_number<T: Scalar>(&mut self) -> Result<T> {
        self.skip_ws();
        let start = self.ix;
        if let Some(b'-' | b'+') = self.peek() {
            self.ix += 1;
        }
        let mut digit_count = self.skip_digits();
        if self.peek() == Some(b'.') {
            self.ix += 1;
            digit_count += self.skip_digits();
        }
        if digit_count == 0 {
            self.ix = start;
            return Err(self.error("expected a number"));
        }
        if let Some(b'e' | b'E') = self.peek() {
            let exp_start = self.ix;
            self.ix += 1;
            if let Some(b'-' | b'+') = self.peek() {
                self.ix += 1;
            }
            if self.skip_digits() == 0 {
                self.ix = exp_start;
                return Err(self.error("malformed exponent"));
            }
        }
        let value: T = self.data[start..self.ix].parse().map_err(|_| Error::MalformedPath {
            offset: start,
            reason: "invalid number",
        })?;
        if !value.is_finite() {
            return Err(Error::MalformedPath {
                offset: start,
                reason: "number out of range",
            });
        }
        Ok(value)
    }

    fn get_point<T: Scalar>(&mut self) -> Result<Vec2<T>> {
        let x = self.get_number()?;
        self.opt_comma();
        let y = self.get_number()?;
        Ok(Vec2::new(x, y))
    }
}
