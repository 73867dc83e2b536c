use crate::Definition;
use nom::{
    IResult, Parser,
    bytes::complete::take_till,
    character::complete::char,
    combinator::{all_consuming, map, opt, rest},
    sequence::preceded,
};

const ASSIGNMENT_CHARACTER: char = '=';

pub fn definition(input: &str) -> IResult<&str, Definition> {
    map(
        all_consuming((name, opt(preceded(char(ASSIGNMENT_CHARACTER), rest)))),
        |(name, value): (&str, Option<&str>)| {
            let mut definition = Definition::new();

            definition.set_name(Some(name));
            definition.set_value(value);

            definition
        },
    )
    .parse(input)
}

fn name(input: &str) -> IResult<&str, &str> {
    take_till(|character: char| character == ASSIGNMENT_CHARACTER).parse(input)
}
