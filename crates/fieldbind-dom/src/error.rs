use crate::tree::NodeId;

/// Errors raised by structural operations on a [`NodeTree`](crate::NodeTree)
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
	#[error("Unknown node: {0}")]
	UnknownNode(NodeId),

	#[error("Node {0} is not an element")]
	NotAnElement(NodeId),

	#[error("Node {child} is not a child of {parent}")]
	NotAChild { parent: NodeId, child: NodeId },

	#[error("Node {0} is already attached to a parent")]
	AlreadyAttached(NodeId),

	#[error("Node {0} has no parent")]
	Detached(NodeId),

	#[error("The document node cannot be inserted into another node")]
	DocumentNotInsertable,
}

pub type DomResult<T> = Result<T, DomError>;
