error_chain! {
    foreign_links {
        Io(std::io::Error)
        /// An error while reading or writing a dataset file.
        ;
        ParseInt(std::num::ParseIntError)
        /// A numeric parameter of a dataset is not a valid number.
        ;
        Regex(regex::Error)
        /// A pattern of a dataset parser failed to compile.
        ;
    }

    errors {
        MalformedDataset(line: usize, reason: String) {
            description("the dataset does not follow its expected format")
            display("malformed dataset in line {}: {}", line, reason)
        }

        MalformedToken(token: String, expected_format: String) {
            description("a token of the dataset does not follow its expected format")
            display("'{}' is not of the form '{}'", token, expected_format)
        }

        MissingLine(line: usize) {
            description("the dataset has fewer lines than expected")
            display("the dataset has no line {}", line)
        }
    }
}
