//! Diagonal-gait rewrite of naive command streams.
//!
//! The naive translator realises every diagonal hop as a rectangular detour:
//! two cardinal advances with a 90° turn between them. This pass spots those
//! detours as 4-token windows and replaces them with 45° turns and half-cell
//! advances so the mouse cuts across cell corners.
//!
//! ## Windows
//!
//! | Window | Shape | Physical heading while in gait | Family |
//! |--------|-------|--------------------------------|--------|
//! | `RFLF` | zigzag, first turn right | naive heading + 45° clockwise | left |
//! | `LFLF` | staircase, turning left | naive heading + 45° clockwise | left |
//! | `LFRF` | zigzag, first turn left | naive heading + 45° counter-clockwise | right |
//! | `RFRF` | staircase, turning right | naive heading + 45° counter-clockwise | right |
//!
//! While a gait is active the mouse runs half a cell behind the naive pose
//! and 45° off its heading. A family is named after the 45° turn that
//! closes it. Every exit from a gait realigns with the naive pose, so the
//! rewritten stream ends at the same cell and heading as the naive one.
//! Naive streams only ever hold cardinal headings, so the start pose must
//! face a cardinal direction.

use log::debug;

use crate::core::{Pose, TurnSide};
use crate::error::{MazeError, Result};

use super::Command;

const F: Command = Command::Forward;
const L: Command = Command::TurnLeft;
const R: Command = Command::TurnRight;
const L45: Command = Command::TurnLeft45;
const R45: Command = Command::TurnRight45;
const FH: Command = Command::ForwardHalf;

/// Category of the last committed maneuver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MovementBlock {
    /// Nothing committed yet
    #[default]
    None,
    /// Straight advance (or the half-cell lead-in to a gait)
    F,
    /// Lone left turn
    L,
    /// Lone right turn
    R,
    /// Left turn plus advance
    LF,
    /// Right turn plus advance
    RF,
    /// Zigzag gait entered with a right turn
    RFLF,
    /// Zigzag gait entered with a left turn
    LFRF,
    /// Right staircase gait
    RFRF,
    /// Left staircase gait
    LFLF,
}

impl MovementBlock {
    /// Which 45° turn closes this gait.
    ///
    /// `None` for blocks that leave the mouse aligned with the naive pose.
    pub fn family(self) -> Option<TurnSide> {
        match self {
            MovementBlock::RFLF | MovementBlock::LFLF => Some(TurnSide::Left),
            MovementBlock::LFRF | MovementBlock::RFRF => Some(TurnSide::Right),
            _ => None,
        }
    }

    /// Swap left and right
    pub fn mirror(self) -> Self {
        match self {
            MovementBlock::L => MovementBlock::R,
            MovementBlock::R => MovementBlock::L,
            MovementBlock::LF => MovementBlock::RF,
            MovementBlock::RF => MovementBlock::LF,
            MovementBlock::RFLF => MovementBlock::LFRF,
            MovementBlock::LFRF => MovementBlock::RFLF,
            MovementBlock::RFRF => MovementBlock::LFLF,
            MovementBlock::LFLF => MovementBlock::RFRF,
            other => other,
        }
    }

    /// Diagonal window formed by the first four tokens, if any
    fn window(tokens: &[Command]) -> Option<Self> {
        match tokens {
            [R, F, L, F, ..] => Some(MovementBlock::RFLF),
            [L, F, R, F, ..] => Some(MovementBlock::LFRF),
            [R, F, R, F, ..] => Some(MovementBlock::RFRF),
            [L, F, L, F, ..] => Some(MovementBlock::LFLF),
            _ => None,
        }
    }

    fn single(command: Command) -> Self {
        match command {
            L => MovementBlock::L,
            R => MovementBlock::R,
            _ => MovementBlock::F,
        }
    }
}

/// Output of the rewrite
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GaitPlan {
    /// Rewritten command stream
    pub commands: Vec<Command>,
    /// Pose reached after the stream, identical to the naive stream's
    pub end_pose: Pose,
}

/// Rewrite a naive `{F, L, R}` stream into diagonal gaits.
///
/// `start` is the pose the stream will be executed from and must face a
/// cardinal direction. Any token outside the naive alphabet is rejected.
pub fn rewrite_diagonals(start: Pose, naive: &[Command]) -> Result<GaitPlan> {
    if !start.heading.is_cardinal() {
        return Err(MazeError::NonCardinalHeading(start.heading));
    }
    if let Some(bad) = naive.iter().find(|c| !c.is_naive()) {
        return Err(MazeError::InvalidCommand(bad.label().to_string()));
    }

    let mut rewriter = DiagonalRewriter::new(start);
    rewriter.run(naive);

    debug!(
        "[Gait] rewrote {} naive tokens into {} commands, ending at {}",
        naive.len(),
        rewriter.output.len(),
        rewriter.pose
    );

    Ok(GaitPlan {
        commands: rewriter.output,
        end_pose: rewriter.pose,
    })
}

/// Rewrite state machine.
///
/// `pose` follows the naive stream as tokens are consumed, so it is always
/// the pose the mouse will hold once the current gait is closed.
struct DiagonalRewriter {
    pose: Pose,
    last_block: MovementBlock,
    output: Vec<Command>,
}

impl DiagonalRewriter {
    fn new(pose: Pose) -> Self {
        Self {
            pose,
            last_block: MovementBlock::None,
            output: Vec::new(),
        }
    }

    fn run(&mut self, tokens: &[Command]) {
        let mut i = 0;

        while tokens.len() - i >= 4 {
            // A lone F right before a window leads into the gait.
            if tokens[i] == F && tokens.len() - i >= 5 {
                if let Some(window) = MovementBlock::window(&tokens[i + 1..]) {
                    self.lead_in();
                    self.consume(&tokens[i..i + 1]);
                    self.enter_window(window, &tokens[i + 1..i + 5]);
                    i += 5;
                    continue;
                }
            }

            if let Some(window) = MovementBlock::window(&tokens[i..]) {
                self.enter_window(window, &tokens[i..i + 4]);
                i += 4;
                continue;
            }

            i += self.bridge_or_single(&tokens[i..]);
        }

        self.close_gait();
        for &token in &tokens[i..] {
            self.single(token);
        }
    }

    /// Emit commands, mirrored when `flip`.
    fn emit(&mut self, commands: &[Command], flip: bool) {
        self.output
            .extend(commands.iter().map(|&c| if flip { c.mirror() } else { c }));
    }

    /// Advance the naive pose over consumed tokens.
    fn consume(&mut self, tokens: &[Command]) {
        for &token in tokens {
            self.pose = match token {
                F => self.pose.advanced(),
                other => {
                    let (left, right) = other.rotation_steps();
                    self.pose.turned(left, right)
                }
            };
        }
    }

    fn single(&mut self, token: Command) {
        self.output.push(token);
        self.consume(&[token]);
        self.last_block = MovementBlock::single(token);
    }

    /// Half-cell lead-in ahead of a window.
    ///
    /// Leaves the mouse on the naive heading half a cell past the naive
    /// pose it had before the `F`.
    fn lead_in(&mut self) {
        match self.last_block.family() {
            None => self.emit(&[FH], false),
            Some(side) => self.emit(&[L45, F], side == TurnSide::Right),
        }
        self.last_block = MovementBlock::F;
    }

    fn enter_window(&mut self, window: MovementBlock, tokens: &[Command]) {
        // Canonical tables are written for windows whose first turn is right.
        let flip = matches!(window, MovementBlock::LFRF | MovementBlock::LFLF);
        let relative = self
            .last_block
            .family()
            .map(|side| if flip { side.mirror() } else { side });
        let lead_in = self.last_block == MovementBlock::F;

        let canonical = if flip { window.mirror() } else { window };
        let commands: &[Command] = match canonical {
            MovementBlock::RFLF => match relative {
                Some(TurnSide::Left) => &[F],
                Some(TurnSide::Right) => &[R, F],
                None if lead_in => &[R45, F],
                None => &[R, FH, L45, FH],
            },
            _ => match relative {
                Some(TurnSide::Right) => &[R, FH, R, FH],
                Some(TurnSide::Left) => &[FH, R, FH],
                None if lead_in => &[R45, FH, R, FH],
                None => &[R, FH, R45, FH],
            },
        };

        self.emit(commands, flip);
        self.consume(tokens);
        self.last_block = window;
    }

    /// Leave an active gait where the next tokens allow a short bridge,
    /// otherwise realign and emit one token. Returns tokens consumed.
    fn bridge_or_single(&mut self, tokens: &[Command]) -> usize {
        if let Some(side) = self.last_block.family() {
            // Canonical bridges are written for the left family.
            let flip = side == TurnSide::Right;
            let m = |c: Command| if flip { c.mirror() } else { c };
            let starts_with = |pattern: &[Command]| {
                tokens.len() >= pattern.len()
                    && pattern.iter().zip(tokens).all(|(p, t)| m(*p) == *t)
            };

            let bridge: Option<(&[Command], MovementBlock, usize)> = if starts_with(&[R, F]) {
                Some((&[FH, R45, FH][..], MovementBlock::RF, 2))
            } else if starts_with(&[L, F]) {
                Some((&[L, FH, L45, FH][..], MovementBlock::LF, 2))
            } else if starts_with(&[F, L, F]) {
                Some((&[L45, F, L45, FH, L45, FH][..], MovementBlock::LF, 3))
            } else {
                None
            };

            if let Some((commands, block, consumed)) = bridge {
                self.emit(commands, flip);
                self.consume(&tokens[..consumed]);
                self.last_block = if flip { block.mirror() } else { block };
                return consumed;
            }

            self.emit(&[L45, FH], flip);
        }

        self.single(tokens[0]);
        1
    }

    /// Realign with the naive pose if a gait is still active.
    fn close_gait(&mut self) {
        if let Some(side) = self.last_block.family() {
            self.emit(&[L45, FH], side == TurnSide::Right);
            self.last_block = MovementBlock::None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::{CommandSequence, KinematicPose};
    use crate::core::{CellCoord, Direction};

    fn rewrite(text: &str) -> GaitPlan {
        let naive: CommandSequence = text.parse().unwrap();
        rewrite_diagonals(Pose::default(), naive.as_slice()).unwrap()
    }

    fn text(plan: &GaitPlan) -> String {
        CommandSequence::from(plan.commands.clone()).to_string()
    }

    fn assert_equivalent(start: Pose, naive: &[Command]) {
        let plan = rewrite_diagonals(start, naive).unwrap();
        let expected = KinematicPose::from(start).run(naive);
        let actual = KinematicPose::from(start).run(&plan.commands);
        assert_eq!(
            actual,
            expected,
            "naive {} rewrote to {}",
            CommandSequence::from(naive),
            CommandSequence::from(plan.commands.clone())
        );
        assert_eq!(expected.pose(), Some(plan.end_pose));
    }

    #[test]
    fn test_four_zigzags() {
        let plan = rewrite("R#F#L#F#R#F#L#F#R#F#L#F#R#F#L#F#");
        assert_eq!(text(&plan), "R#FH#L45#FH#F#F#F#L45#FH#");
        assert!(plan.commands.len() < 16);
        assert_eq!(plan.end_pose, Pose::new(CellCoord::new(4, 4), Direction::North));
    }

    #[test]
    fn test_single_window_closes_gait() {
        let plan = rewrite("L#F#R#F#");
        assert_eq!(text(&plan), "L#FH#R45#FH#R45#FH#");
        assert_eq!(plan.end_pose, Pose::new(CellCoord::new(-1, 1), Direction::North));
    }

    #[test]
    fn test_staircase() {
        let plan = rewrite("R#F#R#F#R#F#R#F#");
        assert_eq!(text(&plan), "R#FH#R45#FH#R#FH#R#FH#R45#FH#");
    }

    #[test]
    fn test_lead_in_from_straight() {
        let plan = rewrite("F#R#F#L#F#");
        assert_eq!(text(&plan), "FH#R45#F#L45#FH#");
        assert_eq!(plan.end_pose, Pose::new(CellCoord::new(1, 2), Direction::North));
    }

    #[test]
    fn test_bridge_out_of_gait() {
        // Zigzag, then a right turn into a straight run
        let plan = rewrite("R#F#L#F#R#F#F#F#F#");
        assert_eq!(text(&plan), "R#FH#L45#FH#FH#R45#FH#F#F#F#");
    }

    #[test]
    fn test_plain_stream_unchanged() {
        let plan = rewrite("F#F#L#F#F#");
        assert_eq!(text(&plan), "F#F#L#F#F#");
    }

    #[test]
    fn test_rejects_diagonal_start() {
        let start = Pose::new(CellCoord::new(0, 0), Direction::SouthEast);
        assert_eq!(
            rewrite_diagonals(start, &[Command::Forward]),
            Err(MazeError::NonCardinalHeading(Direction::SouthEast))
        );
    }

    #[test]
    fn test_rejects_rich_alphabet() {
        let result = rewrite_diagonals(Pose::default(), &[Command::Forward, Command::ForwardHalf]);
        assert_eq!(result, Err(MazeError::InvalidCommand("FH".to_string())));
    }

    #[test]
    fn test_equivalence_exhaustive_short_streams() {
        // Every {F, L, R} stream up to nine tokens, from two start poses.
        // Nine covers window, F, window (lead-in out of an active gait).
        let alphabet = [F, L, R];
        let starts = [
            Pose::new(CellCoord::new(0, 0), Direction::North),
            Pose::new(CellCoord::new(3, -2), Direction::West),
        ];

        for len in 0..=9u32 {
            for n in 0..3usize.pow(len) {
                let mut stream = Vec::with_capacity(len as usize);
                let mut k = n;
                for _ in 0..len {
                    stream.push(alphabet[k % 3]);
                    k /= 3;
                }
                for start in starts {
                    assert_equivalent(start, &stream);
                }
            }
        }
    }

    #[test]
    fn test_lead_in_out_of_active_gait() {
        let plan = rewrite("R#F#L#F#F#R#F#L#F#");
        assert_eq!(text(&plan), "R#FH#L45#FH#L45#F#R45#F#L45#FH#");
        assert_eq!(plan.end_pose, Pose::new(CellCoord::new(2, 3), Direction::North));
        assert_equivalent(Pose::default(), &[R, F, L, F, F, R, F, L, F]);
    }

    #[test]
    fn test_frf_bridge_out_of_right_family() {
        let plan = rewrite("L#F#R#F#F#R#F#F#");
        assert_eq!(text(&plan), "L#FH#R45#FH#R45#F#R45#FH#R45#FH#F#");
        assert_eq!(plan.end_pose, Pose::new(CellCoord::new(1, 2), Direction::East));
        assert_equivalent(Pose::default(), &[L, F, R, F, F, R, F, F]);
    }

    #[test]
    fn test_staircase_after_zigzag_of_same_family() {
        let plan = rewrite("L#F#R#F#R#F#R#F#");
        assert_eq!(text(&plan), "L#FH#R45#FH#R#FH#R#FH#R45#FH#");
        assert_eq!(plan.end_pose, Pose::new(CellCoord::new(0, 0), Direction::South));
        assert_equivalent(Pose::default(), &[L, F, R, F, R, F, R, F]);
    }

    #[test]
    fn test_equivalence_long_mixed_stream() {
        let naive: CommandSequence =
            "F#R#F#L#F#R#F#L#F#L#F#F#L#F#R#F#R#F#R#F#F#L#F#L#F#L#F#R#F#F#F#R#F#L#F#R#F#"
                .parse()
                .unwrap();
        assert_equivalent(Pose::default(), naive.as_slice());
    }

    #[test]
    fn test_family() {
        assert_eq!(MovementBlock::RFLF.family(), Some(TurnSide::Left));
        assert_eq!(MovementBlock::LFLF.family(), Some(TurnSide::Left));
        assert_eq!(MovementBlock::RFRF.family(), Some(TurnSide::Right));
        assert_eq!(MovementBlock::F.family(), None);
        assert_eq!(MovementBlock::RFLF.mirror(), MovementBlock::LFRF);
    }
}
