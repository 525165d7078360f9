error_chain! {
    errors {
        MalformedInput(reason: String) {
            description("the input violates a precondition of the algorithm")
            display("malformed input: {}", reason)
        }

        Disconnected(unreachable_edges: usize) {
            description("some edges of the graph are not reachable from the traversal")
            display("the graph is disconnected: {} edges cannot be reached from the traversal", unreachable_edges)
        }

        Unbalanced(reason: String) {
            description("the degrees of the graph do not admit an Eulerian traversal")
            display("the graph is not Eulerian: {}", reason)
        }
    }
}
