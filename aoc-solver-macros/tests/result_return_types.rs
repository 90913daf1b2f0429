use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverExt};

struct SharedData {
    numbers: Vec<i32>,
    sum: Option<i32>,
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 4)]
struct FourParts;

impl AocParser for FourParts {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let numbers = input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat(format!("Expected integer: {line}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SharedData { numbers, sum: None })
    }
}

impl PartSolver<1> for FourParts {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum = shared.numbers.iter().sum::<i32>();
        shared.sum = Some(sum);
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for FourParts {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.numbers.is_empty() {
            return Err(SolveError::failed("Empty input"));
        }
        Ok(shared.numbers.iter().product::<i32>().to_string())
    }
}

impl PartSolver<3> for FourParts {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .numbers
            .iter()
            .max()
            .map(i32::to_string)
            .ok_or_else(|| SolveError::failed("no maximum"))
    }
}

impl PartSolver<4> for FourParts {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum = shared
            .sum
            .ok_or_else(|| SolveError::failed("part 1 has not run"))?;
        Ok((sum * 2).to_string())
    }
}

#[test]
fn test_all_four_parts() {
    let mut shared = FourParts::parse("2\n3\n4").unwrap();

    assert_eq!(FourParts::solve_part(&mut shared, 1).unwrap(), "9");
    assert_eq!(FourParts::solve_part(&mut shared, 2).unwrap(), "24");
    assert_eq!(FourParts::solve_part(&mut shared, 3).unwrap(), "4");
    assert_eq!(FourParts::solve_part(&mut shared, 4).unwrap(), "18");
    assert_eq!(<FourParts as Solver>::PARTS, 4);
}

#[test]
fn test_solve_failed_is_propagated() {
    let mut shared = FourParts::parse("").unwrap();

    let err = FourParts::solve_part(&mut shared, 2).unwrap_err();
    assert!(matches!(err, SolveError::SolveFailed(_)));
    assert_eq!(err.to_string(), "Solve failed: Empty input");
}

#[test]
fn test_part_depends_on_earlier_part() {
    let mut shared = FourParts::parse("1\n1").unwrap();

    assert!(matches!(
        FourParts::solve_part(&mut shared, 4),
        Err(SolveError::SolveFailed(_))
    ));
    FourParts::solve_part(&mut shared, 1).unwrap();
    assert_eq!(FourParts::solve_part(&mut shared, 4).unwrap(), "4");
}

#[test]
fn test_checked_range_beyond_max_parts() {
    let mut shared = FourParts::parse("1").unwrap();

    assert!(matches!(
        FourParts::solve_part_checked_range(&mut shared, 5),
        Err(SolveError::PartOutOfRange(5))
    ));
    assert!(matches!(
        FourParts::solve_part(&mut shared, 5),
        Err(SolveError::PartNotImplemented(5))
    ));
}

#[test]
fn test_parse_error_message() {
    let err = FourParts::parse("1\nx").err().unwrap();
    assert_eq!(err.to_string(), "Invalid format: Expected integer: x");
}
