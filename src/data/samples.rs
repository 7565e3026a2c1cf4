use crate::models::{Difficulty, Question};

fn sample(id: i64, code: &str, answer: &str, difficulty_level: Difficulty) -> Question {
    Question {
        id,
        question_text: code.to_string(),
        answer: answer.to_string(),
        code_snippet: Some(code.to_string()),
        difficulty_level,
    }
}

/// Built-in questions used whenever the service has nothing to offer.
pub fn sample_questions() -> Vec<Question> {
    vec![
        sample(
            1,
            "print(\"Hello, World!\")\nprint(\"Welcome to Python!\")",
            "This code prints two lines of text to the console",
            Difficulty::Beginner,
        ),
        sample(
            2,
            "for i in range(5):\n    print(i)",
            "This code prints numbers 0 through 4, each on a new line",
            Difficulty::Beginner,
        ),
        sample(
            3,
            "x = [1, 2, 3]\ny = x\ny.append(4)\nprint(x)",
            "This code prints [1, 2, 3, 4] because y and x reference the same list",
            Difficulty::Intermediate,
        ),
        sample(
            4,
            "def factorial(n):\n    if n <= 1:\n        return 1\n    return n * factorial(n-1)",
            "This is a recursive function that calculates the factorial of a number",
            Difficulty::Intermediate,
        ),
        sample(
            5,
            "import pandas as pd\ndf = pd.DataFrame({\"A\": [1, 2], \"B\": [3, 4]})",
            "This code creates a pandas DataFrame with two columns A and B",
            Difficulty::Advanced,
        ),
    ]
}
