//! Tiny step language for scripted sessions.
//!
//! Steps are whitespace separated:
//!
//! - `left`, `right`, `up`, `down`: commanded swipe
//! - `drag:X,Y`: drag to `(X, Y)` and release
//! - `hold:X,Y`: drag to `(X, Y)`, wait past the hold timeout, release
//! - `cancel:X,Y`: drag to `(X, Y)` and cancel
//! - `undo`, `tap`
//! - `wait:MS`: let time pass

use anyhow::{anyhow, bail, Context, Result};
use cardstack::{Point, SwipeDirection};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    Swipe(SwipeDirection),
    Drag(Point),
    Hold(Point),
    Cancel(Point),
    Undo,
    Tap,
    Wait(u64),
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(token: &str) -> Result<Self> {
        let (name, argument) = match token.split_once(':') {
            Some((name, argument)) => (name, Some(argument)),
            None => (token, None),
        };
        let step = match (name, argument) {
            ("left", None) => Step::Swipe(SwipeDirection::Left),
            ("right", None) => Step::Swipe(SwipeDirection::Right),
            ("up", None) => Step::Swipe(SwipeDirection::Up),
            ("down", None) => Step::Swipe(SwipeDirection::Down),
            ("undo", None) => Step::Undo,
            ("tap", None) => Step::Tap,
            ("drag", Some(argument)) => Step::Drag(parse_point(argument)?),
            ("hold", Some(argument)) => Step::Hold(parse_point(argument)?),
            ("cancel", Some(argument)) => Step::Cancel(parse_point(argument)?),
            ("wait", Some(argument)) => Step::Wait(
                argument
                    .parse()
                    .with_context(|| format!("bad wait duration in `{token}`"))?,
            ),
            _ => bail!("unknown step `{token}`"),
        };
        Ok(step)
    }
}

fn parse_point(argument: &str) -> Result<Point> {
    let (x, y) = argument
        .split_once(',')
        .ok_or_else(|| anyhow!("expected X,Y but got `{argument}`"))?;
    let x = x.trim().parse().with_context(|| format!("bad x in `{argument}`"))?;
    let y = y.trim().parse().with_context(|| format!("bad y in `{argument}`"))?;
    Ok(Point::new(x, y))
}

pub fn parse_script(script: &str) -> Result<Vec<Step>> {
    script.split_whitespace().map(str::parse::<Step>).collect()
}
