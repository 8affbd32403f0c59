/*!
# `[LET] <variable>=<expression>`

## Purpose
Store a value in a variable.

## Remarks
The word `LET` is optional. A variable ending in `$` holds a string,
any other variable holds a number. Assigning the wrong kind of value
is a `TYPE MISMATCH`.

## Example
```text
LET G$="HI":N=2
PRINT G$;N
HI 2
N$=5
?TYPE MISMATCH; N$
```

*/
