//! Reader for `cnf(name, role, disjunction).` statements

use crate::error::{ResoluteError, Result};
use crate::logic::{Clause, ClauseType, Literal, Term, EQUALITY};
use nom::{
    branch::alt,
    bytes::complete::{escaped_transform, is_not, tag, take_until, take_while},
    character::complete::{char, digit1, multispace1, satisfy},
    combinator::{map, map_res, opt, recognize, value, verify},
    multi::{many0, separated_list0, separated_list1},
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};

/// Whitespace, `%` line comments and `/* */` block comments
fn junk(input: &str) -> IResult<&str, ()> {
    value(
        (),
        many0(alt((
            value((), multispace1),
            value((), pair(char('%'), opt(is_not("\n\r")))),
            value((), tuple((tag("/*"), take_until("*/"), tag("*/")))),
        ))),
    )(input)
}

/// A punctuation token followed by junk
fn sym<'a>(c: char) -> impl FnMut(&'a str) -> IResult<&'a str, char> {
    terminated(char(c), junk)
}

fn lower_word(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c| c.is_ascii_lowercase()),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
    ))(input)
}

fn upper_word(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c| c.is_ascii_uppercase() || c == '_'),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
    ))(input)
}

fn dollar_word(input: &str) -> IResult<&str, &str> {
    recognize(pair(char('$'), lower_word))(input)
}

/// `'...'` with `\'` and `\\` escapes; yields the unquoted text
fn single_quoted(input: &str) -> IResult<&str, String> {
    delimited(
        char('\''),
        escaped_transform(
            is_not("\\'"),
            '\\',
            alt((value("\\", char('\\')), value("'", char('\'')))),
        ),
        char('\''),
    )(input)
}

/// Function, predicate and clause names
fn symbol(input: &str) -> IResult<&str, String> {
    terminated(
        alt((
            single_quoted,
            map(lower_word, str::to_string),
            map(digit1, str::to_string),
        )),
        junk,
    )(input)
}

fn variable(input: &str) -> IResult<&str, Term> {
    map(terminated(upper_word, junk), Term::var)(input)
}

fn arguments(input: &str) -> IResult<&str, Vec<Term>> {
    delimited(sym('('), separated_list1(sym(','), term), sym(')'))(input)
}

pub(crate) fn term(input: &str) -> IResult<&str, Term> {
    alt((
        variable,
        map(pair(symbol, opt(arguments)), |(name, args)| {
            Term::app(name, args.unwrap_or_default())
        }),
    ))(input)
}

/// `=` or `!=` between two terms; the flag is set for `!=`
fn equality_tail(input: &str) -> IResult<&str, (bool, Term)> {
    pair(
        alt((
            value(true, terminated(tag("!="), junk)),
            value(false, terminated(tag("="), junk)),
        )),
        term,
    )(input)
}

/// An atom or an equation, with the flag set for `!=`
fn atom(input: &str) -> IResult<&str, (Term, bool)> {
    map(
        verify(
            pair(term, opt(equality_tail)),
            |(head, tail): &(Term, Option<(bool, Term)>)| tail.is_some() || !head.is_var(),
        ),
        |(head, tail)| match tail {
            Some((negated, rhs)) => (Term::app(EQUALITY, vec![head, rhs]), negated),
            None => (head, false),
        },
    )(input)
}

/// A literal; `$false` yields `None`
fn literal(input: &str) -> IResult<&str, Option<Literal>> {
    alt((
        value(None, terminated(tag("$false"), junk)),
        map(pair(opt(sym('~')), atom), |(tilde, (atom, negated))| {
            Some(Literal::new(atom, tilde.is_some() != negated))
        }),
    ))(input)
}

/// A literal or a parenthesised disjunction
fn disjunct(input: &str) -> IResult<&str, Vec<Option<Literal>>> {
    alt((
        delimited(sym('('), disjunction, sym(')')),
        map(literal, |lit| vec![lit]),
    ))(input)
}

fn disjunction(input: &str) -> IResult<&str, Vec<Option<Literal>>> {
    map(separated_list1(sym('|'), disjunct), |parts| {
        parts.into_iter().flatten().collect()
    })(input)
}

fn role(input: &str) -> IResult<&str, ClauseType> {
    terminated(map_res(lower_word, str::parse::<ClauseType>), junk)(input)
}

/// Annotation terms are read and discarded
fn general_term(input: &str) -> IResult<&str, ()> {
    let word = alt((
        value((), single_quoted),
        value((), lower_word),
        value((), upper_word),
        value((), dollar_word),
        value((), digit1),
    ));
    let application = value(
        (),
        pair(
            terminated(word, junk),
            opt(delimited(sym('('), separated_list0(sym(','), general_term), sym(')'))),
        ),
    );
    let list = value(
        (),
        delimited(sym('['), separated_list0(sym(','), general_term), sym(']')),
    );
    value(
        (),
        pair(alt((list, application)), opt(preceded(sym(':'), general_term))),
    )(input)
}

fn annotations(input: &str) -> IResult<&str, ()> {
    value((), preceded(sym(','), separated_list1(sym(','), general_term)))(input)
}

/// One `cnf(...)` statement, including trailing junk
pub(crate) fn cnf_statement(input: &str) -> IResult<&str, Clause> {
    let (input, _) = terminated(tag("cnf"), junk)(input)?;
    let (input, _) = sym('(')(input)?;
    let (input, name) = symbol(input)?;
    let (input, _) = sym(',')(input)?;
    let (input, clause_type) = role(input)?;
    let (input, _) = sym(',')(input)?;
    let (input, literals) = disjunction(input)?;
    let (input, _) = opt(annotations)(input)?;
    let (input, _) = sym(')')(input)?;
    let (input, _) = sym('.')(input)?;
    let literals = literals.into_iter().flatten().collect();
    Ok((input, Clause::named(name, clause_type, literals)))
}

fn line_of(text: &str, rest: &str) -> usize {
    let offset = text.len() - rest.len();
    text[..offset].matches('\n').count() + 1
}

/// All clauses of a clause-text document, in order
pub fn parse_clauses(text: &str) -> Result<Vec<Clause>> {
    let (mut rest, _) = junk(text).map_err(|e| ResoluteError::Parse(e.to_string()))?;
    let mut clauses = Vec::new();
    while !rest.is_empty() {
        for unsupported in ["fof", "tff", "thf", "include"] {
            let opens = rest
                .strip_prefix(unsupported)
                .is_some_and(|after| after.trim_start().starts_with('('));
            if opens {
                return Err(ResoluteError::Parse(format!(
                    "line {}: {} statements are not supported",
                    line_of(text, rest),
                    unsupported
                )));
            }
        }
        match cnf_statement(rest) {
            Ok((remaining, clause)) => {
                clauses.push(clause);
                rest = remaining;
            }
            Err(_) => {
                let snippet: String = rest.chars().take(40).collect();
                return Err(ResoluteError::Parse(format!(
                    "line {}: invalid clause near '{}'",
                    line_of(text, rest),
                    snippet.trim_end()
                )));
            }
        }
    }
    Ok(clauses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::EqSign;

    fn parse_one(text: &str) -> Clause {
        let (rest, clause) = cnf_statement(text).unwrap();
        assert_eq!(rest, "");
        clause
    }

    #[test]
    fn test_simple_clause() {
        let clause = parse_one("cnf(c1, axiom, p(X) | ~q(a, f(Y))).");
        assert_eq!(clause.name, "c1");
        assert_eq!(clause.clause_type, ClauseType::Axiom);
        assert_eq!(clause.literals_string(), "p(X)|~q(a,f(Y))");
        assert!(clause.literals[1].is_negative());
    }

    #[test]
    fn test_equations() {
        let clause = parse_one("cnf(e, axiom, f(X) = a | b != c | ~ d = e).");
        let signs: Vec<_> = clause.literals.iter().map(Literal::eq_sign).collect();
        assert_eq!(
            signs,
            vec![
                Some(EqSign::Equal),
                Some(EqSign::NotEqual),
                Some(EqSign::NotEqual)
            ]
        );
        assert_eq!(clause.literals_string(), "f(X)=a|b!=c|d!=e");
    }

    #[test]
    fn test_parentheses_and_false() {
        let clause = parse_one("cnf(x, negated_conjecture, ((p | q) | $false)).");
        assert_eq!(clause.len(), 2);
        let empty = parse_one("cnf(goal, plain, $false).");
        assert!(empty.is_empty());
    }

    #[test]
    fn test_quoted_names() {
        let clause = parse_one(r"cnf('my clause', axiom, 'Big'('it\'s', x)).");
        assert_eq!(clause.name, "my clause");
        assert_eq!(clause.literals[0].predicate(), "Big");
        assert_eq!(
            clause.literals[0].atom().args()[0],
            Term::constant("it's")
        );
        assert_eq!(clause.literals_string(), r"'Big'('it\'s',x)");
    }

    #[test]
    fn test_annotations_are_skipped() {
        let clause = parse_one(
            "cnf(c3, plain, p(a), inference(resolution, [status(thm)], [c1, c2])).",
        );
        assert_eq!(clause.literals_string(), "p(a)");
        let sourced = parse_one("cnf(ax, axiom, p, file('x.p', ax), [description('D')]).");
        assert_eq!(sourced.len(), 1);
    }

    #[test]
    fn test_comments() {
        let text = "% header\n/* block\n comment */ cnf(a, axiom, p). % trailing\ncnf(b, axiom, ~p).\n";
        let clauses = parse_clauses(text).unwrap();
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[1].name, "b");
    }

    #[test]
    fn test_variable_atom_is_rejected() {
        assert!(cnf_statement("cnf(a, axiom, X).").is_err());
    }

    #[test]
    fn test_errors_name_the_line() {
        let err = parse_clauses("cnf(a, axiom, p).\n\ncnf(b, axiom, p(.\n").unwrap_err();
        assert!(err.to_string().contains("line 3"), "{}", err);

        let err = parse_clauses("fof(a, axiom, p).").unwrap_err();
        assert!(err.to_string().contains("not supported"));

        let err = parse_clauses("cnf(a, wrong_role, p).").unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }
}
