/*!
# Expressions and Types

There are two types of data: single precision numbers and strings.
Variable names consist of an ASCII letter followed by optional letters
and digits. A name ending in `$` holds a string, any other name holds
a number. A variable that was never assigned reads as 0 or as an
empty string.

```text
LET PI = 3.14
NAME$ = "ZAPHOD"
```

Numbers are written in decimal, like `42`, `1.5` or `.5`.
Strings are written between double quotes.

## Operators

From the tightest binding to the loosest:

| Operator | Meaning |
|---|---|
| `^` | Power, grouped right to left so `2^3^2` is 512 |
| `-` | Negation, so `-2^2` is -4 |
| `*` `/` | Multiply and divide |
| `+` `-` | Add and subtract, `+` also joins two strings |
| `=` `<>` `<` `>` `<=` `>=` | Comparisons, 1 when true and 0 when false |
| `NOT` | 1 when the operand is 0, otherwise 0 |
| `AND` `OR` | Logic on numbers, grouped left to right |

Parentheses override the order. Comparisons work on two numbers or
on two strings. Mixing a string and a number in one operation is a
`TYPE MISMATCH`. Dividing by zero is a `DIVISION BY ZERO` error and a
result too large for a single precision number is an `OVERFLOW`.

```text
PRINT (2 + 3) * 4; "AB" + "CD"; 1 < 2 AND "A" < "B"
20 ABCD 1
```

Numbers print in the shortest form that reads back the same value.
Very large and very small numbers use an exponent.

The next two chapters of this manual are a reference for statements and functions.

*/
