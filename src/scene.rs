// Reads the curve setup (degree, steps, control points) from a token stream.
// Visual: nothing on screen yet; this runs in the terminal before the window opens.

use crate::error::Error;
use crate::types::Point2;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Largest degree whose Pascal row still fits comfortably in u64.
pub const MAX_DEGREE: usize = 64;

/// Upper bound on curve segments per frame; far past what a window can show.
pub const MAX_STEPS: usize = 100_000;

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub degree: usize,
    pub num_steps: usize,
    pub control_points: Vec<Point2>,
}

impl Scene {
    /// Checks that the curve can be evaluated without reading past the point list.
    /// More than degree+1 points is allowed: the extras are drawn and draggable
    /// but never weighted into the curve.
    pub fn new(degree: usize, num_steps: usize, control_points: Vec<Point2>) -> Result<Self, Error> {
        if num_steps == 0 {
            return Err(Error::ZeroSteps);
        }
        if num_steps > MAX_STEPS {
            return Err(Error::TooManySteps { steps: num_steps, max: MAX_STEPS });
        }
        if degree > MAX_DEGREE {
            return Err(Error::DegreeTooLarge { degree, max: MAX_DEGREE });
        }
        if control_points.len() < degree + 1 {
            return Err(Error::TooFewControlPoints { degree, count: control_points.len() });
        }
        // "inf" and "NaN" parse as f32 but cannot be placed on screen
        if let Some(index) = control_points.iter().position(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(Error::NonFiniteCoordinate { index });
        }
        if control_points.len() > degree + 1 {
            log::warn!(
                "{} control points for a degree {} curve; points {}..{} do not affect the curve",
                control_points.len(),
                degree,
                degree + 1,
                control_points.len() - 1
            );
        }
        Ok(Self { degree, num_steps, control_points })
    }
}

/// Whitespace-separated tokens pulled lazily from a reader, so values can
/// be spread over lines any way the user likes.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self { reader, pending: VecDeque::new() }
    }

    fn next_token(&mut self) -> Result<Option<String>, Error> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    fn next<T: FromStr>(&mut self, what: &str) -> Result<T, Error> {
        let token = self
            .next_token()?
            .ok_or_else(|| Error::MissingValue { what: what.to_owned() })?;
        token
            .parse()
            .map_err(|_| Error::InvalidValue { what: what.to_owned(), token })
    }
}

/// Read the scene in the order: degree, steps, point count, then x y per point.
/// A prompt line goes to `prompts` before each value (pass `io::sink()` to silence).
pub fn read_scene<R: BufRead, W: Write>(input: R, mut prompts: W) -> Result<Scene, Error> {
    let mut tokens = Tokens::new(input);

    writeln!(prompts, "Enter the degree of the curve: ")?;
    prompts.flush()?;
    let degree: usize = tokens.next("the degree")?;

    writeln!(prompts, "Enter the number of steps: ")?;
    prompts.flush()?;
    let num_steps: usize = tokens.next("the number of steps")?;

    writeln!(prompts, "Enter the number of control points: ")?;
    prompts.flush()?;
    let count: usize = tokens.next("the number of control points")?;

    // The count is untrusted; only the points actually read get allocated
    let mut control_points = Vec::with_capacity(count.min(MAX_DEGREE + 1));
    for i in 0..count {
        writeln!(prompts, "Enter control point {i} coordinates: ")?;
        prompts.flush()?;
        let x: f32 = tokens.next(&format!("x of control point {i}"))?;
        let y: f32 = tokens.next(&format!("y of control point {i}"))?;
        control_points.push(Point2::new(x, y));
    }

    Scene::new(degree, num_steps, control_points)
}
