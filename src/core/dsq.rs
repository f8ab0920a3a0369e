use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Ordering;
use std::collections::VecDeque;

use super::state::TaskId;

/// Ordering key for the priority queue: smaller `key` first, then smaller task id.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct Rank {
    pub key: i128,
    pub task: TaskId,
}

impl Rank {
    pub fn new(key: impl Into<i128>, task: TaskId) -> Self {
        Self {
            key: key.into(),
            task,
        }
    }
}

// KeyedPriorityQueue is a max-heap, so we need to flip-flop Rank's Ord
impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.key, other.task).cmp(&(self.key, self.task))
    }
}

/// Ready queue holding the tasks eligible to run.
#[derive(Debug)]
pub enum Dsq {
    Fifo {
        tasks: VecDeque<TaskId>,
    },
    Priq {
        tasks: KeyedPriorityQueue<TaskId, Rank>,
    },
}

impl Dsq {
    pub fn new_fifo() -> Self {
        Self::Fifo {
            tasks: VecDeque::new(),
        }
    }

    pub fn new_priq() -> Self {
        Self::Priq {
            tasks: KeyedPriorityQueue::new(),
        }
    }

    pub fn push_fifo(&mut self, task: TaskId) {
        debug_assert!(!self.contains(task), "Task {task} enqueued twice");
        match self {
            Self::Fifo { tasks } => tasks.push_back(task),
            Self::Priq { .. } => panic!("Attempted to push to a Priq DSQ with no rank"),
        }
    }

    pub fn push_ranked(&mut self, rank: Rank) {
        debug_assert!(!self.contains(rank.task), "Task {} enqueued twice", rank.task);
        match self {
            Self::Fifo { .. } => panic!("Attempted to push a ranked task to a Fifo DSQ"),
            Self::Priq { tasks } => {
                tasks.push(rank.task, rank);
            }
        }
    }

    pub fn pop(&mut self) -> Option<TaskId> {
        match self {
            Self::Fifo { tasks } => tasks.pop_front(),
            Self::Priq { tasks } => tasks.pop().map(|t| t.0),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Fifo { tasks } => tasks.is_empty(),
            Self::Priq { tasks } => tasks.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Fifo { tasks } => tasks.len(),
            Self::Priq { tasks } => tasks.len(),
        }
    }

    pub fn contains(&self, task_id: TaskId) -> bool {
        match self {
            Self::Fifo { tasks } => tasks.contains(&task_id),
            Self::Priq { tasks } => tasks.iter().any(|t| *t.0 == task_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_pops_in_push_order() {
        let mut dsq = Dsq::new_fifo();
        dsq.push_fifo(2);
        dsq.push_fifo(0);
        dsq.push_fifo(1);
        assert_eq!(dsq.len(), 3);
        assert_eq!(dsq.pop(), Some(2));
        assert_eq!(dsq.pop(), Some(0));
        assert_eq!(dsq.pop(), Some(1));
        assert_eq!(dsq.pop(), None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "enqueued twice")]
    fn double_enqueue_is_caught() {
        let mut dsq = Dsq::new_fifo();
        dsq.push_fifo(1);
        dsq.push_fifo(1);
    }

    #[test]
    fn priq_pops_smallest_key_then_lowest_task() {
        let mut dsq = Dsq::new_priq();
        dsq.push_ranked(Rank::new(3u64, 0));
        dsq.push_ranked(Rank::new(1u64, 4));
        dsq.push_ranked(Rank::new(1u64, 2));
        dsq.push_ranked(Rank::new(-5i64, 7));
        assert!(dsq.contains(4));
        assert_eq!(dsq.pop(), Some(7));
        assert_eq!(dsq.pop(), Some(2));
        assert_eq!(dsq.pop(), Some(4));
        assert_eq!(dsq.pop(), Some(0));
        assert!(dsq.is_empty());
    }
}
