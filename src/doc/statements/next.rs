/*!
# `NEXT [<variable>][,<variable>...]`

## Purpose
Close the body of a `FOR` loop.

## Remarks
Loops are kept on a stack and `NEXT` always works on the innermost.
Naming a variable checks that it belongs to the innermost loop,
otherwise a `NEXT VARIABLE MISMATCH` error occurs. With a list of
variables each loop is advanced in turn until one of them repeats.
A `NEXT` with no open loop is `NEXT WITHOUT FOR`.

## Example
```text
FOR R=1 TO 2:FOR C=1 TO 3:PRINT R*C;:NEXT:PRINT:NEXT R
123
246
```

*/
