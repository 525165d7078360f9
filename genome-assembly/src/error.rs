error_chain! {
    links {
        Graph(debruijn_graph::error::Error, debruijn_graph::error::ErrorKind)
        /// A wrapper for errors of the graph algorithms.
        ;
    }

    errors {
        Inconsistent(position: usize) {
            description("the two strings spelled by a paired walk disagree where they overlap")
            display("the two strings spelled by a paired walk disagree at position {} of the genome", position)
        }

        MalformedInput(reason: String) {
            description("the input violates a precondition of the reconstruction")
            display("malformed input: {}", reason)
        }
    }
}
