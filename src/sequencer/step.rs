//! Per-step planning: which rect, direction and content a step uses.

use crate::content::Slot;
use crate::geometry::{step_style, unfold_style_at, Action, Dimensions, Direction};
use crate::options::FoldOptions;

/// Progress of one fold or unfold sequence.
///
/// Created fresh by every `fold()`/`unfold()` and dropped at the terminal
/// step. A fold starts from the rect of the last unfolding step, which is
/// recomputed from the geometry rather than carried over from the previous
/// run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepState {
    /// What the sequence does.
    pub action: Action,
    /// Step about to run, in `0..=folds`.
    pub index: usize,
    /// Direction the previous step was hinged on.
    pub last_direction: Direction,
    /// Rect of the previous step.
    pub last_style: Dimensions,
}

/// Container setup done when a sequence starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setup {
    /// Drop any translation left from the unfold.
    ResetContainer,
    /// Translate the container so the open element fits the viewport.
    PlaceContainer,
}

/// A transition step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepPlan {
    /// Hinge of this step.
    pub direction: Direction,
    /// Rect of both panels.
    pub style: Dimensions,
    /// Content on the front of the flipping panel.
    pub top_front: Option<Slot>,
    /// Whether the faces carry the final content.
    pub final_faces: bool,
    /// Container setup, on the first step only.
    pub setup: Option<Setup>,
}

/// The terminal step: the panels give way to the final wrapper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinishPlan {
    /// Rect of the final wrapper.
    pub style: Dimensions,
    /// Which content the wrapper reveals.
    pub face: Slot,
}

/// What the next step does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Plan {
    /// Mount and flip a pair of panels.
    Transition(StepPlan),
    /// End the sequence.
    Finish(FinishPlan),
}

impl StepState {
    /// Fresh state for a sequence starting from `initial`.
    #[must_use]
    pub fn new(action: Action, initial: &Dimensions, options: &FoldOptions) -> Self {
        match action {
            Action::Unfold => Self {
                action,
                index: 0,
                last_direction: options.direction(0),
                last_style: *initial,
            },
            Action::Fold => {
                let last = options.folds.saturating_sub(1);
                Self {
                    action,
                    index: 0,
                    last_direction: options.direction(last),
                    last_style: unfold_style_at(
                        initial,
                        &options.fold_direction,
                        last,
                    ),
                }
            }
        }
    }

    /// Hinge of the current step. Folding walks the directions backwards.
    #[must_use]
    pub fn direction(&self, options: &FoldOptions) -> Direction {
        match self.action {
            Action::Unfold => options.direction(self.index),
            Action::Fold => options.direction(
                options.folds.saturating_sub(1 + self.index),
            ),
        }
    }

    /// Hinge the next fold step halves along; `bottom` past the start.
    fn next_fold_direction(&self, options: &FoldOptions) -> Direction {
        options
            .folds
            .checked_sub(2 + self.index)
            .map_or(Direction::Bottom, |i| options.direction(i))
    }

    /// Whether the sequence has reached its terminal step.
    #[must_use]
    pub fn is_terminal(&self, options: &FoldOptions) -> bool {
        self.index >= options.folds
    }

    /// Plan the current step.
    #[must_use]
    pub fn plan(&self, initial: &Dimensions, options: &FoldOptions) -> Plan {
        let folds = options.folds;
        let index = self.index;
        let action = self.action;

        if self.is_terminal(options) {
            return Plan::Finish(match action {
                Action::Fold => FinishPlan {
                    style: *initial,
                    face: Slot::Initial,
                },
                Action::Unfold => FinishPlan {
                    style: step_style(
                        action,
                        self.last_direction,
                        &self.last_style,
                    ),
                    face: Slot::Final,
                },
            });
        }

        let mut plan = StepPlan {
            direction: self.direction(options),
            style: match action {
                Action::Fold => self.last_style,
                Action::Unfold => *initial,
            },
            top_front: None,
            final_faces: false,
            setup: None,
        };
        let first = index == 0;
        let last = index + 1 == folds;

        if first || last {
            match action {
                Action::Fold => {
                    if last {
                        plan.style = *initial;
                        plan.top_front = Some(Slot::Initial);
                    }
                    if first {
                        plan.setup = Some(Setup::ResetContainer);
                        plan.final_faces = true;
                    }
                }
                Action::Unfold => {
                    if first {
                        plan.setup = Some(Setup::PlaceContainer);
                        plan.top_front = Some(Slot::Initial);
                    } else {
                        plan.style = step_style(
                            action,
                            self.last_direction,
                            &self.last_style,
                        );
                    }
                    if last {
                        plan.final_faces = true;
                    }
                }
            }
        } else {
            plan.style =
                step_style(action, self.last_direction, &self.last_style);
        }

        Plan::Transition(plan)
    }

    /// Record a staged step and move to the next index.
    pub fn advance(&mut self, staged: &StepPlan, options: &FoldOptions) {
        self.last_direction = match self.action {
            Action::Fold => self.next_fold_direction(options),
            Action::Unfold => staged.direction,
        };
        self.last_style = staged.style;
        self.index += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: Dimensions = Dimensions::sized(100.0, 100.0);

    fn options(folds: usize, dirs: &[Direction]) -> FoldOptions {
        FoldOptions {
            folds,
            fold_direction: dirs.to_vec(),
            ..FoldOptions::default()
        }
    }

    /// Plan every step of a sequence.
    fn walk(action: Action, opts: &FoldOptions) -> (Vec<StepPlan>, FinishPlan) {
        let mut state = StepState::new(action, &SQUARE, opts);
        let mut steps = Vec::new();
        loop {
            match state.plan(&SQUARE, opts) {
                Plan::Transition(step) => {
                    state.advance(&step, opts);
                    steps.push(step);
                }
                Plan::Finish(finish) => return (steps, finish),
            }
        }
    }

    #[test]
    fn unfold_right_top_walk() {
        let opts = options(2, &[Direction::Right, Direction::Top]);
        let (steps, finish) = walk(Action::Unfold, &opts);
        assert_eq!(steps.len(), 2);

        assert_eq!(steps[0].direction, Direction::Right);
        assert_eq!(steps[0].style, SQUARE);
        assert_eq!(steps[0].setup, Some(Setup::PlaceContainer));
        assert_eq!(steps[0].top_front, Some(Slot::Initial));
        assert!(!steps[0].final_faces);

        assert_eq!(steps[1].direction, Direction::Top);
        assert_eq!(steps[1].style, Dimensions::sized(200.0, 100.0));
        assert!(steps[1].final_faces);

        assert_eq!(finish.face, Slot::Final);
        assert_eq!(
            finish.style,
            Dimensions {
                width: 200.0,
                height: 200.0,
                left: 0.0,
                top: -100.0,
            }
        );
    }

    #[test]
    fn fold_mirrors_unfold() {
        let dirs = [Direction::Left, Direction::Bottom, Direction::Top];
        let opts = options(3, &dirs);
        let (unfold, _) = walk(Action::Unfold, &opts);
        let (fold, finish) = walk(Action::Fold, &opts);

        assert_eq!(fold.len(), unfold.len());
        for (f, u) in fold.iter().zip(unfold.iter().rev()) {
            assert_eq!(f.direction, u.direction);
            assert_eq!(f.style, u.style);
        }
        assert_eq!(fold[0].setup, Some(Setup::ResetContainer));
        assert!(fold[0].final_faces);
        assert_eq!(fold[2].top_front, Some(Slot::Initial));
        assert_eq!(finish.style, SQUARE);
        assert_eq!(finish.face, Slot::Initial);
    }

    #[test]
    fn single_fold_is_first_and_last() {
        let opts = options(1, &[Direction::Bottom]);
        let (steps, finish) = walk(Action::Unfold, &opts);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].setup, Some(Setup::PlaceContainer));
        assert!(steps[0].final_faces);
        assert_eq!(finish.style, Dimensions::sized(100.0, 200.0));

        let (steps, finish) = walk(Action::Fold, &opts);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].setup, Some(Setup::ResetContainer));
        assert_eq!(steps[0].top_front, Some(Slot::Initial));
        assert!(steps[0].final_faces);
        assert_eq!(steps[0].style, SQUARE);
        assert_eq!(finish.style, SQUARE);
    }

    #[test]
    fn middle_steps_carry_no_content() {
        let opts = options(4, &[]);
        let (steps, _) = walk(Action::Unfold, &opts);
        for step in &steps[1..3] {
            assert_eq!(step.top_front, None);
            assert!(!step.final_faces);
            assert_eq!(step.setup, None);
        }
        assert_eq!(steps[3].style.height, 800.0);
    }

    #[test]
    fn fold_starts_from_last_unfolding_rect() {
        let opts = options(2, &[Direction::Left, Direction::Left]);
        let state = StepState::new(Action::Fold, &SQUARE, &opts);
        assert_eq!(state.last_direction, Direction::Left);
        assert_eq!(
            state.last_style,
            Dimensions {
                width: 200.0,
                height: 100.0,
                left: -100.0,
                top: 0.0,
            }
        );
    }
}
